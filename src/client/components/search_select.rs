use dioxus::prelude::*;

use crate::{client::util::fetch::search_options, model::select::SelectOptionDto};

/// Characters that must be typed before a search select queries the server.
pub const MIN_INPUT_LENGTH: usize = 2;

pub const SELECT_THEME: &str = "select select-bordered w-full";
pub const DROPDOWN_CLASS: &str = "my_select2_dropdown";

pub fn meets_minimum_input(term: &str) -> bool {
    term.trim().chars().count() >= MIN_INPUT_LENGTH
}

/// Input state of a [`SearchSelect`].
///
/// `text` is what the input shows, `term` what was last searched for. Picking a suggestion
/// only changes the shown text, so it does not start another search.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SelectInput {
    pub text: String,
    pub term: String,
    pub selected: Option<SelectOptionDto>,
    pub open: bool,
}

impl SelectInput {
    pub fn type_text(&mut self, text: String) {
        self.term = text.clone();
        self.text = text;
        self.selected = None;
        self.open = true;
    }

    pub fn pick(&mut self, option: SelectOptionDto) {
        self.text = option.text.clone();
        self.selected = Some(option);
        self.open = false;
    }

    pub fn focus(&mut self) {
        self.open = true;
    }

    pub fn blur(&mut self) {
        self.open = false;
    }

    /// Value submitted with the form: the selected option's id, empty if none.
    pub fn value(&self) -> String {
        self.selected
            .as_ref()
            .map(|option| option.id.to_string())
            .unwrap_or_default()
    }
}

/// Select whose options are searched on the server as the user types.
///
/// The selected option's id is submitted under `name`.
#[component]
pub fn SearchSelect(name: String, url: String, placeholder: String) -> Element {
    let mut search = use_signal(SelectInput::default);
    let term = use_memo(move || search.read().term.clone());

    let suggestions = use_resource(move || {
        let url = url.clone();
        let term = term();
        async move {
            if !meets_minimum_input(&term) {
                return Vec::new();
            }
            search_options(&url, &term).await
        }
    });

    let current = search.read().clone();
    let value = current.value();
    let options = suggestions.read().clone();

    rsx!(
        div { class: "relative w-full",
            input { r#type: "hidden", name: "{name}", value: "{value}" }
            input {
                class: "{SELECT_THEME}",
                r#type: "text",
                autocomplete: "off",
                placeholder: "{placeholder}",
                value: "{current.text}",
                onfocus: move |_| search.write().focus(),
                onfocusout: move |_| search.write().blur(),
                oninput: move |evt| search.write().type_text(evt.value()),
            }
            if current.open {
                ul { class: "menu {DROPDOWN_CLASS} absolute z-20 w-full bg-base-100 rounded-box shadow max-h-64 overflow-y-auto flex-nowrap",
                    if !meets_minimum_input(&current.term) {
                        li { class: "disabled",
                            span { "Please enter {MIN_INPUT_LENGTH} or more characters" }
                        }
                    } else {
                        {match options {
                            None => rsx!(
                                li { class: "disabled", span { "Searching…" } }
                            ),
                            Some(options) if options.is_empty() => rsx!(
                                li { class: "disabled", span { "No results found" } }
                            ),
                            Some(options) => rsx!(
                                {options.into_iter().map(|option| {
                                    let id = option.id;
                                    let text = option.text.clone();
                                    rsx!(
                                        li { key: "{id}",
                                            button {
                                                r#type: "button",
                                                // Keeps focus on the input so it does not blur before the pick
                                                onmousedown: move |evt| {
                                                    evt.prevent_default();
                                                    search.write().pick(option.clone());
                                                },
                                                "{text}"
                                            }
                                        }
                                    )
                                })}
                            ),
                        }}
                    }
                }
            }
        }
    )
}

/// Select over a fixed option list, styled like [`SearchSelect`].
#[component]
pub fn RenderSelect(name: String, options: &'static [(&'static str, &'static str)]) -> Element {
    rsx!(
        select { class: "{SELECT_THEME} {DROPDOWN_CLASS}", name: "{name}",
            for (code, label) in options.iter() {
                option { key: "{code}", value: "{code}", "{label}" }
            }
        }
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    mod select_input {
        use super::*;

        fn jita() -> SelectOptionDto {
            SelectOptionDto {
                id: 30000142,
                text: "Jita".to_string(),
            }
        }

        /// Tests picking a suggestion.
        ///
        /// Verifies that the chosen text is shown without becoming the search term, so no
        /// new search is issued for it.
        ///
        /// Expected: text "Jita", term still "Ji", value is the option id, dropdown closed
        #[test]
        fn pick_keeps_search_term() {
            let mut input = SelectInput::default();
            input.type_text("Ji".to_string());

            input.pick(jita());

            assert_eq!(input.text, "Jita");
            assert_eq!(input.term, "Ji");
            assert_eq!(input.value(), "30000142");
            assert!(!input.open);
        }

        /// Tests typing after a pick.
        ///
        /// Expected: selection cleared, term follows the text
        #[test]
        fn typing_clears_selection() {
            let mut input = SelectInput::default();
            input.pick(jita());

            input.type_text("Am".to_string());

            assert_eq!(input.term, "Am");
            assert_eq!(input.value(), "");
            assert!(input.open);
        }

        /// Tests leaving the input.
        ///
        /// Expected: dropdown closed, text kept
        #[test]
        fn blur_closes_dropdown() {
            let mut input = SelectInput::default();
            input.type_text("Jita".to_string());

            input.blur();

            assert!(!input.open);
            assert_eq!(input.text, "Jita");
        }
    }

    mod meets_minimum_input {
        use super::*;

        /// Tests the search threshold.
        ///
        /// Expected: queries start at two characters, surrounding whitespace ignored
        #[test]
        fn requires_two_characters() {
            assert!(!meets_minimum_input(""));
            assert!(!meets_minimum_input("J"));
            assert!(!meets_minimum_input(" J "));
            assert!(meets_minimum_input("Ji"));
            assert!(meets_minimum_input("Jita"));
        }
    }
}
