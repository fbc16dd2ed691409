pub const DEPOSIT_FEE: &str = "0 BPS";

/// The registry fee plus one basis point, e.g. `5` → `"6 BPS"`.
pub fn withdrawal_fee_label(withdrawal_fee: Option<f64>) -> String {
    format!("{} BPS", withdrawal_fee.unwrap_or(0.0) + 1.0)
}
