//! Record types: what one extraction returns and what two merge into.
//!
//! All fields are optional because the model is told to answer `null` for
//! anything it cannot find, and because the two invoice kinds genuinely carry
//! different subsets (fuse size lives on the grid invoice, energy company on
//! the retailer invoice). `#[serde(default)]` means a reply that omits a key
//! entirely deserialises the same as an explicit `null`.

use serde::{Deserialize, Serialize};

/// One month of consumption history, as printed in the invoice text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyConsumption {
    /// `YYYY-MM`.
    pub month: String,
    pub kwh: f64,
}

/// Structured data extracted from a single invoice PDF.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractedInvoiceData {
    /// "Nätfaktura" or "Energifaktura".
    pub invoice_type: Option<String>,
    pub name: Option<String>,
    pub address: Option<String>,
    pub phone_number: Option<String>,
    pub email: Option<String>,
    /// Rated amperage, normalised to always end in "A" (e.g. "25A").
    pub fuse_size: Option<String>,
    pub grid_provider: Option<String>,
    pub energy_company: Option<String>,
    /// Unique identifier of the customer's grid connection (Anläggnings-ID / EAN / GS1).
    pub anlaggnings_id: Option<String>,
    pub total_consumed_kwh_period: Option<f64>,
    pub expected_consumption_year_kwh: Option<f64>,
    /// "beraknad_arsforbrukning", "verklig_arsforbrukning_proxy" or "not_available".
    pub expected_source: Option<String>,
    /// Monthly history when the PDF prints numeric values; `None` otherwise.
    pub historical_monthly_kwh: Option<Vec<MonthlyConsumption>>,
    /// Why `historical_monthly_kwh` is `None` (e.g. "chart_only_no_numeric_values").
    pub history_reason: Option<String>,
}

/// Two invoices merged into one record, first non-empty value per field.
///
/// The invoice types are the exception: both are kept so the caller can see
/// which documents contributed (typically one Nätfaktura and one
/// Energifaktura, but the flow does not enforce that).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CombinedInvoiceData {
    pub invoice_type_1: Option<String>,
    pub invoice_type_2: Option<String>,
    pub name: Option<String>,
    pub address: Option<String>,
    pub phone_number: Option<String>,
    pub email: Option<String>,
    pub fuse_size: Option<String>,
    pub grid_provider: Option<String>,
    pub energy_company: Option<String>,
    pub anlaggnings_id: Option<String>,
    pub total_consumed_kwh_period: Option<f64>,
    pub expected_consumption_year_kwh: Option<f64>,
    pub expected_source: Option<String>,
    pub historical_monthly_kwh: Option<Vec<MonthlyConsumption>>,
    pub history_reason: Option<String>,
}

impl CombinedInvoiceData {
    /// Merge two optional records field-by-field.
    ///
    /// Strings and history lists: the first document's value wins when it is
    /// present and non-empty, else the second's, else `None`. Numbers: plain
    /// `Option::or` — a legitimate 0.0 kWh from document 1 still wins.
    pub fn merge(
        first: Option<&ExtractedInvoiceData>,
        second: Option<&ExtractedInvoiceData>,
    ) -> Self {
        let a = first.cloned().unwrap_or_default();
        let b = second.cloned().unwrap_or_default();

        Self {
            invoice_type_1: filled(a.invoice_type),
            invoice_type_2: filled(b.invoice_type),
            name: first_filled(a.name, b.name),
            address: first_filled(a.address, b.address),
            phone_number: first_filled(a.phone_number, b.phone_number),
            email: first_filled(a.email, b.email),
            fuse_size: first_filled(a.fuse_size, b.fuse_size),
            grid_provider: first_filled(a.grid_provider, b.grid_provider),
            energy_company: first_filled(a.energy_company, b.energy_company),
            anlaggnings_id: first_filled(a.anlaggnings_id, b.anlaggnings_id),
            total_consumed_kwh_period: a
                .total_consumed_kwh_period
                .or(b.total_consumed_kwh_period),
            expected_consumption_year_kwh: a
                .expected_consumption_year_kwh
                .or(b.expected_consumption_year_kwh),
            expected_source: first_filled(a.expected_source, b.expected_source),
            historical_monthly_kwh: first_nonempty_list(
                a.historical_monthly_kwh,
                b.historical_monthly_kwh,
            ),
            history_reason: first_filled(a.history_reason, b.history_reason),
        }
    }
}

/// `Some(s)` only when `s` has visible content.
fn filled(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.trim().is_empty())
}

fn first_filled(a: Option<String>, b: Option<String>) -> Option<String> {
    filled(a).or_else(|| filled(b))
}

fn first_nonempty_list(
    a: Option<Vec<MonthlyConsumption>>,
    b: Option<Vec<MonthlyConsumption>>,
) -> Option<Vec<MonthlyConsumption>> {
    a.filter(|v| !v.is_empty()).or_else(|| b.filter(|v| !v.is_empty()))
}
