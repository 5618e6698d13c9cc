//! Page configuration types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use pagebot_provider::PageAccount;

/// Business category of a managed page.
///
/// Wire values match the labels the original dashboard UI stores, so exported
/// configuration stays readable by it.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub enum BusinessType {
    #[serde(rename = "E-commerce")]
    ECommerce,
    #[serde(rename = "Travel Agency")]
    TravelAgency,
    #[serde(rename = "Internet Service Provider")]
    Isp,
    #[serde(rename = "Restaurant")]
    Restaurant,
    #[serde(rename = "Real Estate")]
    RealEstate,
    #[default]
    #[serde(rename = "Other")]
    Other,
}

impl BusinessType {
    /// Human-readable label (identical to the wire value).
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::ECommerce => "E-commerce",
            Self::TravelAgency => "Travel Agency",
            Self::Isp => "Internet Service Provider",
            Self::Restaurant => "Restaurant",
            Self::RealEstate => "Real Estate",
            Self::Other => "Other",
        }
    }
}

/// Reply tone used when no custom instructions are set.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub enum BrandVoice {
    #[default]
    #[serde(rename = "Friendly")]
    Friendly,
    #[serde(rename = "Formal")]
    Formal,
    #[serde(rename = "Sales-Oriented")]
    SalesOriented,
    #[serde(rename = "Taglish (Tagalog-English)")]
    Taglish,
    #[serde(rename = "Humorous")]
    Humorous,
}

impl BrandVoice {
    /// Human-readable label (identical to the wire value).
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::Friendly => "Friendly",
            Self::Formal => "Formal",
            Self::SalesOriented => "Sales-Oriented",
            Self::Taglish => "Taglish (Tagalog-English)",
            Self::Humorous => "Humorous",
        }
    }
}

/// Reply language.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub enum Language {
    #[default]
    #[serde(rename = "en")]
    En,
    #[serde(rename = "tl")]
    Tl,
    #[serde(rename = "ceb")]
    Ceb,
}

impl Language {
    /// ISO-style language code (identical to the wire value).
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Tl => "tl",
            Self::Ceb => "ceb",
        }
    }
}

/// One managed Facebook Page and its chatbot configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Page {
    /// Opaque external identifier, unique key within the store.
    #[serde(rename = "pageId")]
    pub page_id: String,
    /// Display name.
    #[serde(rename = "pageName")]
    pub page_name: String,
    /// Page-scoped credential. Opaque; never displayed or logged, only passed
    /// to collaborators.
    #[serde(rename = "accessToken")]
    pub access_token: String,
    #[serde(rename = "businessType")]
    pub business_type: BusinessType,
    /// Used only when `custom_instructions` is empty.
    #[serde(rename = "brandVoice")]
    pub brand_voice: BrandVoice,
    /// Free-text override of the brand voice. Empty string means unset.
    #[serde(rename = "customInstructions")]
    pub custom_instructions: String,
    /// Whether the chatbot currently responds on this page.
    pub active: bool,
    /// Ordered free-text services/FAQs. Order is display-relevant, duplicates
    /// permitted, elements may be empty strings while editing.
    pub services: Vec<String>,
    pub language: Language,
    /// Refreshed on every mutation (toggle, save, add).
    #[serde(rename = "updatedAt")]
    #[serde(with = "crate::utils::datetime")]
    pub updated_at: DateTime<Utc>,
}

impl Page {
    /// Creates a Page from collaborator-supplied raw data with the default
    /// configuration applied.
    #[must_use]
    pub fn from_stub(stub: PageStub) -> Self {
        Self {
            page_id: stub.id,
            page_name: stub.name,
            access_token: stub.access_token,
            business_type: BusinessType::default(),
            brand_voice: BrandVoice::default(),
            custom_instructions: String::new(),
            active: false,
            services: Vec::new(),
            language: Language::default(),
            updated_at: Utc::now(),
        }
    }
}

/// Collaborator-supplied raw page data, before any configuration is applied.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PageStub {
    pub id: String,
    pub name: String,
    #[serde(rename = "accessToken")]
    pub access_token: String,
}

impl From<PageAccount> for PageStub {
    fn from(account: PageAccount) -> Self {
        Self {
            id: account.id,
            name: account.name,
            access_token: account.access_token,
        }
    }
}

/// Derived dashboard counts, recomputed from the store on every read.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct DashboardStats {
    #[serde(rename = "totalPages")]
    pub total_pages: usize,
    #[serde(rename = "activePages")]
    pub active_pages: usize,
}
