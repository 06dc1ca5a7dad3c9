//! Search form: holds the raw text of every filter input and hands typed
//! criteria to the parent on submit.

use common::model::criteria::{FormField, SearchCriteria, SearchForm, POSTCODE_MAX_LEN};
use common::model::property::PropertyType;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::html::Scope;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct SearchFormProps {
    pub on_search: Callback<SearchCriteria>,
}

pub enum Msg {
    FieldChanged(FormField, String),
    Submit,
    Reset,
}

pub struct SearchFormComponent {
    form: SearchForm,
}

impl Component for SearchFormComponent {
    type Message = Msg;
    type Properties = SearchFormProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            form: SearchForm::default(),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::FieldChanged(field, value) => {
                self.form.set(field, value);
                true
            }
            Msg::Submit => {
                let (criteria, rejected) = self.form.to_criteria_lossy();
                for err in rejected {
                    gloo_console::warn!(format!("ignoring search filter: {err}"));
                }
                ctx.props().on_search.emit(criteria);
                false
            }
            Msg::Reset => {
                self.form = SearchForm::default();
                ctx.props().on_search.emit(SearchCriteria::default());
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();

        html! {
            <div class="search-form-container">
                <h2 class="search-form-title">
                    <span class="typing-text">{"Search Properties"}</span>
                </h2>

                <form
                    class="search-form"
                    role="search"
                    onsubmit={link.callback(|e: SubmitEvent| {
                        e.prevent_default();
                        Msg::Submit
                    })}
                >
                    <div class="form-grid">
                        <div class="form-group">
                            <label for="type" class="form-label">{"Property Type"}</label>
                            <select
                                id="type"
                                name="type"
                                class="form-control"
                                aria-label="Select property type"
                                onchange={link.callback(|e: Event| {
                                    let select: HtmlSelectElement = e.target_unchecked_into();
                                    Msg::FieldChanged(FormField::PropertyType, select.value())
                                })}
                            >
                                { type_option("", "Any", &self.form.property_type) }
                                { for PropertyType::ALL.into_iter().map(|kind| {
                                    type_option(kind.as_str(), kind.label(), &self.form.property_type)
                                }) }
                            </select>
                        </div>

                        { self.number_input(link, FormField::MinPrice, "Min Price (LKR)", "e.g. 200000", "Minimum price", (Some("0"), None), Some("1000")) }
                        { self.number_input(link, FormField::MaxPrice, "Max Price (LKR)", "e.g. 500000", "Maximum price", (Some("0"), None), Some("1000")) }
                        { self.number_input(link, FormField::MinBedrooms, "Min Bedrooms", "e.g. 2", "Minimum bedrooms", (Some("1"), Some("10")), None) }
                        { self.number_input(link, FormField::MaxBedrooms, "Max Bedrooms", "e.g. 4", "Maximum bedrooms", (Some("1"), Some("10")), None) }

                        <div class="form-group">
                            <label for="postcode" class="form-label">{"Postcode Area"}</label>
                            <input
                                type="text"
                                id="postcode"
                                name="postcode"
                                class="form-control"
                                placeholder="e.g. BR1, NW1"
                                aria-label="Postcode area"
                                maxlength={POSTCODE_MAX_LEN.to_string()}
                                value={self.form.postcode.clone()}
                                oninput={field_callback(link, FormField::Postcode)}
                            />
                        </div>

                        { self.date_input(link, FormField::DateAfter, "Date Added After", "Properties added after this date") }
                        { self.date_input(link, FormField::DateBefore, "Date Added Before", "Properties added before this date") }
                    </div>

                    <div class="form-actions">
                        <button type="submit" class="search-button">{"Search Properties"}</button>
                        <button
                            type="button"
                            class="reset-button"
                            onclick={link.callback(|_| Msg::Reset)}
                        >
                            {"Clear Filters"}
                        </button>
                    </div>
                </form>
            </div>
        }
    }
}

impl SearchFormComponent {
    #[allow(clippy::too_many_arguments)]
    fn number_input(
        &self,
        link: &Scope<Self>,
        field: FormField,
        label: &'static str,
        placeholder: &'static str,
        aria_label: &'static str,
        (min, max): (Option<&'static str>, Option<&'static str>),
        step: Option<&'static str>,
    ) -> Html {
        let name = field.name();
        html! {
            <div class="form-group">
                <label for={name} class="form-label">{label}</label>
                <input
                    type="number"
                    id={name}
                    name={name}
                    class="form-control"
                    placeholder={placeholder}
                    aria-label={aria_label}
                    min={min}
                    max={max}
                    step={step}
                    value={self.form.value(field).to_string()}
                    oninput={field_callback(link, field)}
                />
            </div>
        }
    }

    fn date_input(
        &self,
        link: &Scope<Self>,
        field: FormField,
        label: &'static str,
        aria_label: &'static str,
    ) -> Html {
        let name = field.name();
        html! {
            <div class="form-group">
                <label for={name} class="form-label">{label}</label>
                <input
                    type="date"
                    id={name}
                    name={name}
                    class="form-control"
                    aria-label={aria_label}
                    value={self.form.value(field).to_string()}
                    oninput={field_callback(link, field)}
                />
            </div>
        }
    }
}

fn field_callback(link: &Scope<SearchFormComponent>, field: FormField) -> Callback<InputEvent> {
    link.callback(move |e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        Msg::FieldChanged(field, input.value())
    })
}

fn type_option(value: &'static str, label: &'static str, current: &str) -> Html {
    html! {
        <option value={value} selected={current == value}>{label}</option>
    }
}
