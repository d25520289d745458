//! Donation flow components: the four-step wizard and its payment views.

mod card_payment;
mod crypto_payment;
mod donation_wizard;
mod pix_payment;
mod step_indicator;

pub use card_payment::CardPayment;
pub use crypto_payment::CryptoPayment;
pub use donation_wizard::DonationForm;
pub use pix_payment::PixPayment;
pub use step_indicator::StepIndicator;
