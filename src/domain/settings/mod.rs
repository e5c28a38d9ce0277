//! Host settings boundary and the translator settings read from it

mod provider;
mod translator;

pub use provider::SettingsProvider;
pub use translator::{
    CostSettings, TranslatorSettings, COST_PER_MILLION_CHARACTERS, DEFAULT_SETTINGS_SECTION,
    DEFAULT_TARGET_LANGUAGE, DESTINATION_FIELD, SERVICE_REGION, SOURCE_FIELD, SOURCE_LANGUAGE,
    SUBSCRIPTION_KEY, TARGET_LANGUAGE, TRANSLATOR_ENDPOINT,
};
