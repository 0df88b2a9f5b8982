//! Display routine mapping lookup outcomes to rendered text
//!
//! The async replacement for the portal's old callback chain: await the
//! channel, branch on the three-way outcome, write the sink once.

use serde::{Deserialize, Serialize};
use tracing::warn;

use super::LookupChannel;
use crate::forms::FieldSink;

const NAME_PREFIX: &str = "Employee name: ";
const NOT_FOUND_PAYLOAD: &str = "Does not exist";
const FETCH_ERROR_MESSAGE: &str = "Error fetching employee name.";

/// The identifier form field, as a name/label pair.
///
/// The portal renamed the field from a generic employee id to the
/// national RUT without changing the lookup contract, so the pair is
/// configuration rather than structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IdentifierField {
    /// Form element name the host page binds the input to.
    pub name: String,
    /// Label used in the empty-field prompt.
    pub label: String,
}

impl IdentifierField {
    /// Current field pair: the RUT-keyed identifier.
    pub fn rut() -> Self {
        Self {
            name: "employee_rut".to_string(),
            label: "RUT".to_string(),
        }
    }

    /// The pre-rename pair, kept for pages still using the numeric id.
    pub fn legacy_id() -> Self {
        Self {
            name: "employee_id".to_string(),
            label: "ID".to_string(),
        }
    }
}

impl Default for IdentifierField {
    fn default() -> Self {
        Self::rut()
    }
}

/// Resolve `raw_identifier` through `channel` and render the outcome.
///
/// Performs exactly one sink write per invocation:
///
/// - empty identifier: prompt text, no request issued
/// - hit: `Employee name: <name>`
/// - miss: `Employee name: Does not exist`
/// - transport failure: `Error fetching employee name.`
///
/// A miss renders through the same template as a hit; callers that need
/// to tell the two apart use [`LookupChannel`] directly.
pub async fn fetch_and_display(
    channel: &dyn LookupChannel,
    field: &IdentifierField,
    raw_identifier: &str,
    sink: &mut dyn FieldSink,
) {
    if raw_identifier.is_empty() {
        sink.set_text(&format!("Enter {} to fetch name", field.label));
        return;
    }

    match channel.fetch_name(raw_identifier).await {
        Ok(outcome) => {
            let payload = outcome.unwrap_or_else(|| NOT_FOUND_PAYLOAD.to_string());
            sink.set_text(&format!("{NAME_PREFIX}{payload}"));
        }
        Err(err) => {
            warn!("Failed to fetch employee name: {err:#}");
            sink.set_text(FETCH_ERROR_MESSAGE);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forms::TextSlot;
    use anyhow::{anyhow, Result};
    use async_trait::async_trait;

    /// Channel that always completes with the given outcome.
    struct FixedChannel(Option<String>);

    #[async_trait]
    impl LookupChannel for FixedChannel {
        async fn fetch_name(&self, _identifier: &str) -> Result<Option<String>> {
            Ok(self.0.clone())
        }
    }

    /// Channel whose request never completes successfully.
    struct FailingChannel;

    #[async_trait]
    impl LookupChannel for FailingChannel {
        async fn fetch_name(&self, _identifier: &str) -> Result<Option<String>> {
            Err(anyhow!("connection refused"))
        }
    }

    /// Channel that must not be reached at all.
    struct UnreachableChannel;

    #[async_trait]
    impl LookupChannel for UnreachableChannel {
        async fn fetch_name(&self, identifier: &str) -> Result<Option<String>> {
            panic!("no request expected, got lookup for {identifier}");
        }
    }

    #[tokio::test]
    async fn empty_identifier_prompts_without_a_request() {
        let mut slot = TextSlot::new();
        fetch_and_display(&UnreachableChannel, &IdentifierField::rut(), "", &mut slot).await;
        assert_eq!(slot.value(), "Enter RUT to fetch name");
    }

    #[tokio::test]
    async fn legacy_field_prompts_with_its_own_label() {
        let mut slot = TextSlot::new();
        fetch_and_display(&UnreachableChannel, &IdentifierField::legacy_id(), "", &mut slot).await;
        assert_eq!(slot.value(), "Enter ID to fetch name");
    }

    #[tokio::test]
    async fn hit_renders_the_name() {
        let channel = FixedChannel(Some("Jane Doe".to_string()));
        let mut slot = TextSlot::new();
        fetch_and_display(&channel, &IdentifierField::rut(), "12.345.678-1", &mut slot).await;
        assert_eq!(slot.value(), "Employee name: Jane Doe");
    }

    #[tokio::test]
    async fn miss_renders_through_the_same_template() {
        let channel = FixedChannel(None);
        let mut slot = TextSlot::new();
        fetch_and_display(&channel, &IdentifierField::rut(), "99.999.999-9", &mut slot).await;
        assert_eq!(slot.value(), "Employee name: Does not exist");
    }

    #[tokio::test]
    async fn transport_failure_renders_the_fixed_message() {
        let mut slot = TextSlot::new();
        fetch_and_display(&FailingChannel, &IdentifierField::rut(), "12.345.678-1", &mut slot)
            .await;
        assert_eq!(slot.value(), "Error fetching employee name.");
    }
}
