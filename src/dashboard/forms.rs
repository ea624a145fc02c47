//! The entry forms for recording a service's income and an expense.

use maud::{Markup, html};
use time::Date;

use crate::{
    endpoints,
    expense::PaymentMethod,
    html::{BUTTON_PRIMARY_STYLE, FORM_LABEL_STYLE, FORM_TEXT_INPUT_STYLE},
    income::DAY_LABELS,
};

const FORM_CARD_STYLE: &str = "p-6 bg-white rounded-lg shadow dark:bg-gray-800 space-y-4";
const FORM_HEADING_STYLE: &str = "text-lg font-semibold text-gray-900 dark:text-white";

fn amount_input(name: &str, label: &str) -> Markup {
    html! {
        div
        {
            label for=(name) class=(FORM_LABEL_STYLE) { (label) }

            div class="input-wrapper w-full"
            {
                input
                    type="number"
                    name=(name)
                    id=(name)
                    step="0.01"
                    min="0"
                    placeholder="0.00"
                    class=(FORM_TEXT_INPUT_STYLE);
            }
        }
    }
}

fn date_input(id_prefix: &str, today: Date) -> Markup {
    let id = format!("{id_prefix}-date");

    html! {
        div
        {
            label for=(id) class=(FORM_LABEL_STYLE) { "Date" }

            input
                type="date"
                name="date"
                id=(id)
                required
                max=(today)
                value=(today)
                class=(FORM_TEXT_INPUT_STYLE);
        }
    }
}

fn form_error(error: Option<&str>) -> Markup {
    html! {
        @if let Some(error) = error
        {
            p class="text-red-500 text-base" { (error) }
        }
    }
}

/// The form for recording the money collected during a service.
///
/// All amount fields are optional. Channels that are left blank count as zero.
pub(super) fn income_form(today: Date, error: Option<&str>) -> Markup {
    html! {
        form
            hx-post=(endpoints::INCOME_API)
            hx-target="#ledger-content"
            hx-swap="outerHTML"
            class=(FORM_CARD_STYLE)
        {
            h3 class=(FORM_HEADING_STYLE) { "Record Income" }

            (date_input("income", today))

            div
            {
                label for="day_label" class=(FORM_LABEL_STYLE) { "Service" }

                select name="day_label" id="day_label" class=(FORM_TEXT_INPUT_STYLE)
                {
                    @for day in DAY_LABELS {
                        option value=(day) { (day) }
                    }
                }
            }

            fieldset class="space-y-2"
            {
                legend class=(FORM_LABEL_STYLE) { "Offerings" }

                div class="grid grid-cols-3 gap-2"
                {
                    (amount_input("offering_bills", "Bills"))
                    (amount_input("offering_coins", "Coins"))
                    (amount_input("offering_card", "Card"))
                }
            }

            fieldset class="space-y-2"
            {
                legend class=(FORM_LABEL_STYLE) { "Tithes" }

                div class="grid grid-cols-3 gap-2"
                {
                    (amount_input("tithe_bills", "Bills"))
                    (amount_input("tithe_coins", "Coins"))
                    (amount_input("tithe_card", "Card"))
                }
            }

            (form_error(error))

            button type="submit" class=(BUTTON_PRIMARY_STYLE) { "Record income" }
        }
    }
}

/// The form for recording an expense.
pub(super) fn expense_form(today: Date, error: Option<&str>) -> Markup {
    html! {
        form
            hx-post=(endpoints::EXPENSE_API)
            hx-target="#ledger-content"
            hx-swap="outerHTML"
            class=(FORM_CARD_STYLE)
        {
            h3 class=(FORM_HEADING_STYLE) { "Record Expense" }

            (date_input("expense", today))

            div
            {
                label for="description" class=(FORM_LABEL_STYLE) { "Description" }

                input
                    type="text"
                    name="description"
                    id="description"
                    placeholder="e.g. Cleaning supplies"
                    class=(FORM_TEXT_INPUT_STYLE);
            }

            div
            {
                label for="amount" class=(FORM_LABEL_STYLE) { "Amount" }

                div class="input-wrapper w-full"
                {
                    input
                        type="number"
                        name="amount"
                        id="amount"
                        step="0.01"
                        required
                        placeholder="0.00"
                        class=(FORM_TEXT_INPUT_STYLE);
                }
            }

            div
            {
                label for="payment_method" class=(FORM_LABEL_STYLE) { "Paid by" }

                select name="payment_method" id="payment_method" class=(FORM_TEXT_INPUT_STYLE)
                {
                    option value=(PaymentMethod::Cash) { "Cash" }
                    option value=(PaymentMethod::Card) { "Card" }
                }
            }

            (form_error(error))

            button type="submit" class=(BUTTON_PRIMARY_STYLE) { "Record expense" }
        }
    }
}

#[cfg(test)]
mod form_tests {
    use scraper::{Html, Selector};
    use time::macros::date;

    use crate::{endpoints, income::DAY_LABELS, test_utils::assert_valid_html};

    use super::{expense_form, income_form};

    #[test]
    fn income_form_has_all_channel_inputs() {
        let markup = income_form(date!(2024 - 06 - 09), None).into_string();
        let fragment = Html::parse_fragment(&markup);
        assert_valid_html(&fragment);

        for name in [
            "offering_bills",
            "offering_coins",
            "offering_card",
            "tithe_bills",
            "tithe_coins",
            "tithe_card",
        ] {
            let selector = Selector::parse(&format!("input[name={name}]")).unwrap();
            assert!(
                fragment.select(&selector).next().is_some(),
                "missing input {name}"
            );
        }

        let form_selector = Selector::parse("form").unwrap();
        let form = fragment.select(&form_selector).next().unwrap();
        assert_eq!(form.value().attr("hx-post"), Some(endpoints::INCOME_API));
    }

    #[test]
    fn income_form_lists_service_days() {
        let markup = income_form(date!(2024 - 06 - 09), None).into_string();
        let fragment = Html::parse_fragment(&markup);

        let option_selector = Selector::parse("select[name=day_label] option").unwrap();
        let options = fragment
            .select(&option_selector)
            .map(|option| option.text().collect::<String>())
            .collect::<Vec<_>>();

        assert_eq!(options, DAY_LABELS);
    }

    #[test]
    fn expense_form_has_payment_method_options() {
        let markup = expense_form(date!(2024 - 06 - 09), None).into_string();
        let fragment = Html::parse_fragment(&markup);
        assert_valid_html(&fragment);

        let option_selector = Selector::parse("select[name=payment_method] option").unwrap();
        let options = fragment
            .select(&option_selector)
            .map(|option| option.text().collect::<String>())
            .collect::<Vec<_>>();

        assert_eq!(options, vec!["Cash", "Card"]);

        let form_selector = Selector::parse("form").unwrap();
        let form = fragment.select(&form_selector).next().unwrap();
        assert_eq!(form.value().attr("hx-post"), Some(endpoints::EXPENSE_API));
    }

    #[test]
    fn expense_form_shows_error_message() {
        let markup =
            expense_form(date!(2024 - 06 - 09), Some("Please enter a description.")).into_string();

        assert!(markup.contains("Please enter a description."));
    }
}
