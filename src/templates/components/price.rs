use crate::domain::money::format_kes;
use crate::domain::{Listing, PaymentPlan};
use maud::{html, Markup};

pub fn condition_badge(listing: &Listing) -> Markup {
    let label = match listing.condition.trim() {
        "" => "Used",
        c => c,
    };
    html! {
        span.badge.badge-new[listing.is_new()] { (label) }
    }
}

/// Compact price block for grid cards.
pub fn price_summary(plan: &PaymentPlan) -> Markup {
    match plan {
        PaymentPlan::Cash { price } => html! {
            div.price.cash {
                span.price-label { "Cash Price" }
                span.price-value { (format_kes(*price)) }
            }
        },
        PaymentPlan::Financed {
            deposit, monthly, ..
        } => html! {
            div.price.financed {
                div.finance-row {
                    span.price-label { "Deposit" }
                    span.finance-value { (format_kes(*deposit)) }
                }
                div.finance-row.monthly {
                    span.price-label { "Monthly" }
                    span.finance-value { (format_kes(*monthly)) }
                }
            }
        },
        PaymentPlan::Unspecified { price } => html! {
            div.price {
                span.price-label { "Price" }
                span.price-value { (format_kes(*price)) }
            }
        },
    }
}

/// Full breakdown shown in the detail modal.
pub fn payment_plan(plan: &PaymentPlan) -> Markup {
    match plan {
        PaymentPlan::Financed {
            price,
            deposit,
            bank_balance,
            monthly,
        } => html! {
            div.payment-plan {
                p.plan-title { "Payment Plan" }
                div.finance-row {
                    span.price-label { "Total Price:" }
                    span.finance-value { (format_kes(*price)) }
                }
                div.finance-row {
                    span.price-label { "Deposit Required:" }
                    span.finance-value { (format_kes(*deposit)) }
                }
                div.finance-row {
                    span.price-label { "Bank Balance:" }
                    span.finance-value { (format_kes(*bank_balance)) }
                }
                div.finance-row.monthly {
                    span.price-label { "Monthly Installment:" }
                    span.finance-value { (format_kes(*monthly)) }
                }
            }
        },
        PaymentPlan::Cash { price } | PaymentPlan::Unspecified { price } => html! {
            div.payment-plan.cash {
                div.price-label { "Total Cash Price" }
                div.price-value { (format_kes(*price)) }
            }
        },
    }
}
