use glam::Vec2;
use std::collections::BTreeMap;
use std::sync::OnceLock;

use super::glyphs;

/// The normalized waypoints one character's stroke path should pass near.
#[derive(Debug, Clone, PartialEq)]
pub struct Template {
	waypoints: Vec<Vec2>,
}

impl Template {
	pub fn new(waypoints: impl IntoIterator<Item = Vec2>) -> Self {
		Self {
			waypoints: waypoints.into_iter().collect(),
		}
	}

	pub fn waypoints(&self) -> &[Vec2] {
		&self.waypoints
	}

	pub fn len(&self) -> usize {
		self.waypoints.len()
	}

	pub fn is_empty(&self) -> bool {
		self.waypoints.is_empty()
	}
}

impl From<&[[f32; 2]]> for Template {
	fn from(value: &[[f32; 2]]) -> Self {
		Self::new(value.iter().copied().map(Vec2::from_array))
	}
}

#[derive(Debug, Clone, Default)]
pub struct TemplateLibrary {
	templates: BTreeMap<String, Template>,
}

impl TemplateLibrary {
	pub fn new() -> Self {
		Self::default()
	}

	/// Letters, digits and the `"10"` token, built on first use.
	pub fn builtin() -> &'static TemplateLibrary {
		static BUILTIN: OnceLock<TemplateLibrary> = OnceLock::new();
		BUILTIN.get_or_init(|| {
			let library = [glyphs::UPPERCASE, glyphs::LOWERCASE, glyphs::DIGITS, glyphs::TOKENS]
				.into_iter()
				.flatten()
				.fold(TemplateLibrary::new(), |library, (key, waypoints)| {
					library.with_template(*key, Template::from(*waypoints))
				});
			tracing::debug!(templates = library.len(), "loaded template library");
			library
		})
	}

	pub fn with_template(mut self, key: impl Into<String>, template: Template) -> Self {
		self.insert(key, template);
		self
	}

	pub fn insert(&mut self, key: impl Into<String>, template: Template) -> Option<Template> {
		self.templates.insert(key.into(), template)
	}

	/// Exact match first, then the uppercase form of a single lowercase letter. A template
	/// without waypoints counts as absent.
	pub fn lookup(&self, character: &str) -> Option<&Template> {
		self.get_nonempty(character).or_else(|| {
			let mut chars = character.chars();
			let c = chars.next()?;
			if chars.next().is_some() || !c.is_lowercase() {
				return None;
			}
			let upper: String = c.to_uppercase().collect();
			self.get_nonempty(&upper)
		})
	}

	fn get_nonempty(&self, key: &str) -> Option<&Template> {
		self.templates.get(key).filter(|t| !t.is_empty())
	}

	/// In key order.
	pub fn iter(&self) -> impl Iterator<Item = (&str, &Template)> {
		self.templates.iter().map(|(k, t)| (k.as_str(), t))
	}

	pub fn len(&self) -> usize {
		self.templates.len()
	}

	pub fn is_empty(&self) -> bool {
		self.templates.is_empty()
	}
}
