use crate::domain::applicant::{DEFAULT_AVAILABILITY, DEFAULT_LICENSE_CLASS};
use crate::domain::screen::Screen;
use crate::domain::NewApplicant;
use crate::templates::desktop_layout;
use maud::{html, Markup};

const LICENSE_CLASSES: [(&str, &str); 3] = [
    ("BCE", "BCE (Heavy Commercial)"),
    ("CE", "CE (Trailer/Articulated)"),
    ("D", "D (Light Vehicle)"),
];
const AVAILABILITY: [&str; 3] = ["Immediate", "Within 2 weeks", "Within a month"];

/// What happened to the last submission.
#[derive(Debug, Clone, PartialEq)]
pub enum FormOutcome {
    Saved,
    Rejected(String),
}

fn pick<'a>(value: &'a str, default: &'a str) -> &'a str {
    if value.trim().is_empty() {
        default
    } else {
        value
    }
}

/// The "Become a Driver" form. After a rejected post the entered values are kept.
pub fn register_page(form: &NewApplicant, outcome: Option<&FormOutcome>) -> Markup {
    let license = pick(&form.license_class, DEFAULT_LICENSE_CLASS);
    let availability = pick(&form.availability, DEFAULT_AVAILABILITY);
    let documents = form.documents.join(", ");

    desktop_layout(
        "Become a Driver",
        Some(Screen::Register),
        html! {
            main.container.register {
                h2 { "Driver Registration" }
                @match outcome {
                    Some(FormOutcome::Saved) => {
                        div.alert.success role="status" { "Registration successful!" }
                    }
                    Some(FormOutcome::Rejected(message)) => {
                        div.alert.error role="alert" { (message) }
                    }
                    None => {}
                }
                form.driver-form method="post" action=(Screen::Register.path()) {
                    input name="fullName" placeholder="Full Name" required value=(form.full_name);
                    input name="phoneNumber" placeholder="Phone Number" required value=(form.phone_number);
                    input name="email" type="email" placeholder="Email Address" value=(form.email);
                    div.form-row {
                        div {
                            label for="licenseClass" { "License Class:" }
                            select id="licenseClass" name="licenseClass" {
                                @for (value, label) in LICENSE_CLASSES {
                                    option value=(value) selected[value == license] { (label) }
                                }
                            }
                        }
                        div {
                            label for="experienceYears" { "Experience (Yrs):" }
                            input id="experienceYears" name="experienceYears" type="number" min="0"
                                placeholder="Years" required value=(form.experience_years);
                        }
                    }
                    input name="currentLocation" placeholder="Current Location (e.g. Mombasa)"
                        required value=(form.current_location);
                    input name="expectedSalary" type="number" min="0"
                        placeholder="Expected Monthly Salary (KES)" value=(form.expected_salary);
                    label for="availability" { "Availability:" }
                    select id="availability" name="availability" {
                        @for value in AVAILABILITY {
                            option value=(value) selected[value == availability] { (value) }
                        }
                    }
                    label for="documents" { "Profile Photo / License Document paths:" }
                    input id="documents" name="documents" placeholder="src/assets/drivers/photo.webp"
                        value=(documents);
                    button.btn.primary type="submit" { "Submit Registration" }
                }
            }
        },
    )
}
