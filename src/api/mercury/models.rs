use chrono::{DateTime, NaiveDate, Utc};
use serde::Deserialize;
use thiserror::Error;

/// Response from GET /accounts
#[derive(Debug, Clone, Deserialize)]
pub struct AccountsResponse {
    pub accounts: Vec<Account>,
}

/// A bank account snapshot as returned by the API.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    pub id: String,
    pub account_number: String,
    pub routing_number: String,
    pub name: String,
    pub status: String,
    #[serde(rename = "type")]
    pub account_type: String,
    pub created_at: DateTime<Utc>,
    pub available_balance: f64,
    pub current_balance: f64,
    pub kind: String,
    pub legal_business_name: String,
    pub dashboard_link: String,
}

/// Response from GET /account/{id}/transactions
#[derive(Debug, Clone, Deserialize)]
pub struct TransactionsResponse {
    pub total: i64,
    pub transactions: Vec<Transaction>,
}

/// A single transaction. Negative amounts are outgoing (spend),
/// positive amounts are incoming (revenue).
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: String,
    pub amount: f64,
    pub bank_description: Option<String>,
    pub counterparty_id: String,
    pub counterparty_name: String,
    pub counterparty_nickname: Option<String>,
    pub created_at: DateTime<Utc>,
    pub dashboard_link: String,
    pub details: Option<TransactionDetails>,
    pub estimated_delivery_date: Option<DateTime<Utc>>,
    pub failed_at: Option<DateTime<Utc>>,
    pub kind: String,
    pub note: Option<String>,
    pub external_memo: Option<String>,
    pub posted_at: Option<DateTime<Utc>>,
    pub reason_for_failure: Option<String>,
    pub status: String,
    pub fee_id: Option<String>,
    pub currency_exchange_info: Option<CurrencyExchangeInfo>,
    pub compliant_with_receipt_policy: Option<bool>,
    pub has_generated_receipt: Option<bool>,
    pub credit_account_period_id: Option<String>,
    pub mercury_category: Option<String>,
    pub general_ledger_code_name: Option<String>,
    #[serde(default)]
    pub attachments: Vec<Attachment>,
}

/// Wire layout of the `details` object: a flat record where at most one
/// of the routing/card payloads is populated per transaction.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawTransactionDetails {
    address: Option<Address>,
    domestic_wire_routing_info: Option<DomesticWireRoutingInfo>,
    electronic_routing_info: Option<ElectronicRoutingInfo>,
    international_wire_routing_info: Option<InternationalWireRoutingInfo>,
    debit_card_info: Option<CardInfo>,
    credit_card_info: Option<CardInfo>,
}

/// Transaction detail payload. The mutually exclusive routing/card
/// payloads collapse into a single `routing` variant; the address can
/// accompany any of them.
#[derive(Debug, Clone, Deserialize)]
#[serde(from = "RawTransactionDetails")]
pub struct TransactionDetails {
    pub address: Option<Address>,
    pub routing: Option<RoutingDetails>,
}

/// Routing or card payload of a transaction, keyed by its kind.
#[derive(Debug, Clone)]
pub enum RoutingDetails {
    DomesticWire(DomesticWireRoutingInfo),
    ElectronicTransfer(ElectronicRoutingInfo),
    InternationalWire(InternationalWireRoutingInfo),
    DebitCard(CardInfo),
    CreditCard(CardInfo),
}

impl From<RawTransactionDetails> for TransactionDetails {
    fn from(raw: RawTransactionDetails) -> Self {
        let routing = if let Some(info) = raw.domestic_wire_routing_info {
            Some(RoutingDetails::DomesticWire(info))
        } else if let Some(info) = raw.electronic_routing_info {
            Some(RoutingDetails::ElectronicTransfer(info))
        } else if let Some(info) = raw.international_wire_routing_info {
            Some(RoutingDetails::InternationalWire(info))
        } else if let Some(info) = raw.debit_card_info {
            Some(RoutingDetails::DebitCard(info))
        } else if let Some(info) = raw.credit_card_info {
            Some(RoutingDetails::CreditCard(info))
        } else {
            None
        };

        TransactionDetails {
            address: raw.address,
            routing,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    pub address1: String,
    pub address2: Option<String>,
    pub city: String,
    pub state: Option<String>,
    pub postal_code: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DomesticWireRoutingInfo {
    pub bank_name: Option<String>,
    pub account_number: String,
    pub routing_number: String,
    pub address: Option<Address>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ElectronicRoutingInfo {
    pub account_number: String,
    // the API serves this key in all-lowercase
    #[serde(rename = "routingnumber")]
    pub routing_number: String,
    pub bank_name: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InternationalWireRoutingInfo {
    pub iban: String,
    pub swift_code: String,
    pub correspondent_info: Option<CorrespondentInfo>,
    pub bank_details: Option<BankDetails>,
    pub address: Option<Address>,
    pub phone_number: Option<String>,
    pub country_specific: Option<CountrySpecific>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CorrespondentInfo {
    pub routing_number: Option<String>,
    pub swift_code: Option<String>,
    pub bank_name: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BankDetails {
    pub bank_name: String,
    pub city_state: String,
    pub country: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CountrySpecific {
    pub country_specific_data_canada: Option<CountrySpecificDataCanada>,
    pub country_specific_data_australia: Option<CountrySpecificDataAustralia>,
    pub country_specific_data_india: Option<CountrySpecificDataIndia>,
    pub country_specific_data_russia: Option<CountrySpecificDataRussia>,
    pub country_specific_data_philippines: Option<CountrySpecificDataPhilippines>,
    pub country_specific_data_south_africa: Option<CountrySpecificDataSouthAfrica>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CountrySpecificDataCanada {
    pub bank_code: String,
    pub transit_number: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CountrySpecificDataAustralia {
    pub bsb_code: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CountrySpecificDataIndia {
    pub ifsc_code: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CountrySpecificDataRussia {
    pub inn: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CountrySpecificDataPhilippines {
    pub routing_number: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CountrySpecificDataSouthAfrica {
    pub branch_code: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CardInfo {
    pub id: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrencyExchangeInfo {
    pub converted_from_currency: String,
    pub converted_to_currency: String,
    pub converted_from_amount: f64,
    pub converted_to_amount: f64,
    pub fee_amount: f64,
    pub fee_percentage: f64,
    pub exchange_rate: f64,
    pub fee_transaction_id: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Attachment {
    pub file_name: String,
    pub url: String,
    pub attachment_type: String,
}

/// Optional query parameters for the transactions endpoint.
#[derive(Debug, Clone, Default)]
pub struct ListTransactionsParams {
    pub limit: Option<u32>,
    pub offset: Option<u32>,
    pub status: Option<String>,
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
    pub search: Option<String>,
}

impl ListTransactionsParams {
    /// Serialize into query pairs. Absent fields are omitted entirely,
    /// never sent as empty strings.
    pub fn to_query(&self) -> Vec<(&'static str, String)> {
        let mut query = Vec::new();
        if let Some(limit) = self.limit {
            query.push(("limit", limit.to_string()));
        }
        if let Some(offset) = self.offset {
            query.push(("offset", offset.to_string()));
        }
        if let Some(status) = &self.status {
            query.push(("status", status.clone()));
        }
        if let Some(start) = self.start {
            query.push(("start", start.format("%Y-%m-%d").to_string()));
        }
        if let Some(end) = self.end {
            query.push(("end", end.format("%Y-%m-%d").to_string()));
        }
        if let Some(search) = &self.search {
            query.push(("search", search.clone()));
        }
        query
    }
}

/// Errors produced by the Mercury API client.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("failed to build request: {0}")]
    Request(String),
    #[error("request failed: {0}")]
    Transport(String),
    #[error("bad request (400): {0}")]
    BadRequest(String),
    #[error("unauthorized (401): {0}")]
    Unauthorized(String),
    #[error("forbidden (403): {0}")]
    Forbidden(String),
    #[error("not found (404): {0}")]
    NotFound(String),
    #[error("server error ({0}): {1}")]
    Server(u16, String),
    #[error("unexpected status ({0}): {1}")]
    Http(u16, String),
    #[error("failed to decode response: {0}")]
    Decode(String),
}
