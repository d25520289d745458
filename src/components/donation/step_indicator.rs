//! Numbered progress dots joined by bars.

use dioxus::prelude::*;
use urbanskate_core::WizardStep;

/// Wizard progress header: one dot per step, filled up to `current`,
/// followed by the current step's title and description.
#[component]
pub fn StepIndicator(current: WizardStep) -> Element {
    let steps = WizardStep::all();

    rsx! {
        div { class: "steps",
            for step in steps.iter().copied() {
                div {
                    key: "{step.number()}",
                    class: if step.is_last() { "step" } else { "step step--grow" },

                    div {
                        class: if current >= step { "step-dot reached" } else { "step-dot" },
                        "{step.number()}"
                    }
                    if !step.is_last() {
                        div { class: if current > step { "step-bar reached" } else { "step-bar" } }
                    }
                }
            }
        }
        div { class: "step-caption",
            h2 { "{current.title()}" }
            p { "{current.description()}" }
        }
    }
}
