use crate::components::*;
use crate::trace::TraceSnapshot;
use leptos::*;
use leptos_meta::*;
use leptos_router::*;

const CHARACTERS: &[&str] = &["a", "b", "e", "A", "B", "I", "o", "3", "7", "10", "?"];

#[component]
pub fn Home() -> impl IntoView {
	let (target, set_target) = create_signal(CHARACTERS[0].to_owned());
	let (snapshot, set_snapshot) = create_signal(None::<TraceSnapshot>);
	let (done, set_done) = create_signal(false);
	let clear = create_trigger();

	create_effect(move |_| {
		target.track();
		set_done.set(false);
		set_snapshot.set(None);
	});

	let attempts = move || snapshot.with(|s| s.as_ref().map_or(0, |s| s.attempts));

	view! {
		<Title text="Home"/>
		<div class="Home">
			<div class="CharacterPicker">
				{CHARACTERS
					.iter()
					.map(|character| {
						view! {
							<button
								class:selected=move || target.with(|t| t.as_str() == *character)
								on:click=move |_| set_target.set(character.to_string())
							>
								{*character}
							</button>
						}
					})
					.collect_view()}
			</div>
			<TracePad
				target=target
				on_complete=move |_: ()| set_done.set(true)
				on_update=move |s: TraceSnapshot| set_snapshot.set(Some(s))
				clear=clear
			/>
			<div class="Controls">
				<button on:click=move |_| {
					clear.notify();
					set_done.set(false);
				}>"Clear"</button>
				<span class="Attempts">{move || format!("Attempts: {}", attempts())}</span>
			</div>
			<Show when=move || done.get()>
				<div class="WellDone">"Well done!"</div>
			</Show>
		</div>
	}
}

#[component]
pub fn NotFound() -> impl IntoView {
	let path = use_location().pathname.get_untracked();

	view! {
		<Title text="Not found"/>
		<div class="NotFound">
			<div>{format!("Not found: {path}")}</div>
			<A href="/">"Return home"</A>
		</div>
	}
}
