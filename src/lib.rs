//! Freehand character tracing: a waypoint template library, a shape validator, and a
//! canvas that captures strokes and checks them as the pen lifts.

pub(crate) mod util;

mod components;
pub mod geom;
mod pages;
pub mod trace;

pub use components::TracePad;

use leptos::*;
use leptos_meta::*;
use leptos_router::*;

#[component]
pub fn App() -> impl IntoView {
	provide_meta_context();

	view! {
		<Html lang="en" dir="ltr" attr:data-theme="light"/>

		<Title formatter=|page| format!("Tracer - {page}")/>

		<Meta charset="UTF-8"/>
		<Meta name="viewport" content="width=device-width, initial-scale=1.0"/>

		<Router>
			<Routes>
				<Route path="/" view=pages::Home/>
				<Route path="/*" view=pages::NotFound/>
			</Routes>
		</Router>
	}
}
