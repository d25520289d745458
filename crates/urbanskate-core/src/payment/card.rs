//! Credit card view. There is no simulated call here, only copy.

pub const TITLE: &str = "Credit Card Payment";

pub const SUMMARY: &str =
    "Credit card integration would be implemented here with a secure payment processor.";

pub const DEMO_NOTICE: &str =
    "This is a demo. In production, this would integrate with Stripe, PayPal, or another payment processor.";
