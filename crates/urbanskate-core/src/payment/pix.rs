//! PIX charge simulation.
//!
//! The payload mimics the shape of a BR Code ("copia e cola") string but the
//! key and checksum are random; no bank will accept it.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use qrcode::render::svg;
use qrcode::QrCode;
use rand::Rng;

use super::Checkout;
use crate::error::{SkateError, SkateResult};

const MERCHANT_NAME: &str = "Urban Skate Track";
const MERCHANT_CITY: &str = "SAO PAULO";
const BASE36: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";
const QR_MIN_SIZE: u32 = 200;

/// Checkout state of the PIX view
pub type PixCheckout = Checkout<PixCharge>;

/// A fabricated PIX charge ready to display
#[derive(Debug, Clone, PartialEq)]
pub struct PixCharge {
    /// Donation amount in USD
    pub amount: f64,
    /// Copy-and-paste payload
    pub payload: String,
    /// `data:image/svg+xml;base64,...` QR image of the payload
    pub qr_data_uri: String,
}

impl PixCharge {
    /// Build a charge for `amount`, rendering the QR image.
    pub fn generate(amount: f64, rng: &mut impl Rng) -> SkateResult<Self> {
        let payload = build_payload(amount, rng);
        let qr_data_uri = render_qr_data_uri(&payload)?;
        Ok(Self {
            amount,
            payload,
            qr_data_uri,
        })
    }
}

fn random_base36(rng: &mut impl Rng, len: usize) -> String {
    (0..len)
        .map(|_| BASE36[rng.random_range(0..BASE36.len())] as char)
        .collect()
}

/// Synthetic BR Code-shaped payload for `amount`.
pub fn build_payload(amount: f64, rng: &mut impl Rng) -> String {
    let key = random_base36(rng, 13);
    let checksum = random_base36(rng, 4).to_uppercase();
    format!(
        "00020126580014BR.GOV.BCB.PIX0136{key}520400005303986540{amount:.2}5802BR5925{MERCHANT_NAME}6009{MERCHANT_CITY}62070503***6304{checksum}"
    )
}

/// Render `payload` as a QR code SVG wrapped in a base64 data URI.
pub fn render_qr_data_uri(payload: &str) -> SkateResult<String> {
    let code = QrCode::new(payload.as_bytes())
        .map_err(|e| SkateError::QrEncoding(format!("{:?}", e)))?;
    let svg_string = code
        .render::<svg::Color>()
        .min_dimensions(QR_MIN_SIZE, QR_MIN_SIZE)
        .dark_color(svg::Color("#000000"))
        .light_color(svg::Color("#ffffff"))
        .build();
    Ok(format!("data:image/svg+xml;base64,{}", STANDARD.encode(svg_string)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_payload_shape() {
        let mut rng = StdRng::seed_from_u64(42);
        let payload = build_payload(100.0, &mut rng);

        assert!(payload.starts_with("00020126580014BR.GOV.BCB.PIX0136"));
        assert!(payload.contains("540100.00"));
        assert!(payload.contains("5925Urban Skate Track"));
        let checksum = payload.rsplit("6304").next().unwrap();
        assert_eq!(checksum.len(), 4);
        assert!(checksum.chars().all(|c| c.is_ascii_digit() || c.is_ascii_uppercase()));
    }

    #[test]
    fn test_payload_key_varies() {
        let mut rng = StdRng::seed_from_u64(1);
        let a = build_payload(25.0, &mut rng);
        let b = build_payload(25.0, &mut rng);
        assert_ne!(a, b);
    }

    #[test]
    fn test_qr_data_uri_is_svg() {
        let uri = render_qr_data_uri("hello pix").unwrap();
        let encoded = uri.strip_prefix("data:image/svg+xml;base64,").unwrap();
        let decoded = String::from_utf8(STANDARD.decode(encoded).unwrap()).unwrap();
        assert!(decoded.contains("<svg"));
    }

    #[test]
    fn test_generate_charge() {
        let mut rng = StdRng::seed_from_u64(9);
        let charge = PixCharge::generate(50.0, &mut rng).unwrap();
        assert_eq!(charge.amount, 50.0);
        assert!(!charge.payload.is_empty());
        assert!(charge.qr_data_uri.starts_with("data:image/svg+xml;base64,"));
    }
}
