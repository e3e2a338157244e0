use dioxus::prelude::*;

#[component]
pub fn SearchBar(
    value: String,
    on_input: EventHandler<String>,
    #[props(default = "Search by title...".to_string())] placeholder: String,
) -> Element {
    rsx! {
        input {
            class: "search-input",
            r#type: "search",
            placeholder: "{placeholder}",
            value: "{value}",
            oninput: move |evt: FormEvent| on_input.call(evt.value()),
        }
    }
}
