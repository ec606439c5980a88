// crates/ssm-env-providers/src/ssm.rs
// ============================================================================
// Module: SSM Parameter Fetcher
// Description: `GetParametersByPath` backed parameter fetcher.
// Purpose: Fetch one page of parameters per call from AWS Systems Manager.
// Dependencies: aws-config, aws-sdk-ssm, ssm-env-core, ssm-env-config, tracing
// ============================================================================

//! ## Overview
//! [`SsmParameterFetcher`] issues one `GetParametersByPath` call per page and
//! maps SDK records into core [`Parameter`] values. A record without a name or
//! value is rejected as malformed rather than silently dropped.

// ============================================================================
// SECTION: Imports
// ============================================================================

use async_trait::async_trait;
use aws_config::BehaviorVersion;
use aws_config::Region;
use aws_sdk_ssm::Client;
use aws_sdk_ssm::error::DisplayErrorContext;
use ssm_env_config::StoreConfig;
use ssm_env_core::FetchError;
use ssm_env_core::FetchRequest;
use ssm_env_core::Parameter;
use ssm_env_core::ParameterFetcher;
use ssm_env_core::ParameterKind;
use ssm_env_core::ParameterPage;
use tracing::debug;

// ============================================================================
// SECTION: Fetcher
// ============================================================================

/// Parameter fetcher backed by AWS Systems Manager.
#[derive(Debug, Clone)]
pub struct SsmParameterFetcher {
    /// SSM API client.
    client: Client,
    /// Page size requested per call (store default when unset).
    max_results: Option<i32>,
}

impl SsmParameterFetcher {
    /// Creates a fetcher around an existing client.
    #[must_use]
    pub const fn new(client: Client, max_results: Option<i32>) -> Self {
        Self {
            client,
            max_results,
        }
    }

    /// Builds a fetcher from the ambient AWS configuration plus overrides.
    ///
    /// The region and endpoint in `config` replace the values resolved from
    /// the environment and profile files when set.
    pub async fn from_config(config: &StoreConfig) -> Self {
        let mut loader = aws_config::defaults(BehaviorVersion::latest());
        if let Some(region) = &config.region {
            loader = loader.region(Region::new(region.clone()));
        }
        if let Some(endpoint) = &config.endpoint_url {
            loader = loader.endpoint_url(endpoint.clone());
        }
        let shared_config = loader.load().await;
        Self::new(Client::new(&shared_config), config.max_results)
    }
}

#[async_trait]
impl ParameterFetcher for SsmParameterFetcher {
    async fn fetch_page(
        &self,
        request: &FetchRequest,
        token: Option<&str>,
    ) -> Result<ParameterPage, FetchError> {
        let output = self
            .client
            .get_parameters_by_path()
            .path(&request.path)
            .recursive(request.recursive)
            .with_decryption(request.with_decryption)
            .set_next_token(token.map(str::to_string))
            .set_max_results(self.max_results)
            .send()
            .await
            .map_err(|err| {
                FetchError::Store(format!("{}: {}", request.path, DisplayErrorContext(&err)))
            })?;
        let parameters =
            output.parameters().iter().map(convert_parameter).collect::<Result<Vec<_>, _>>()?;
        debug!(
            path = %request.path,
            parameters = parameters.len(),
            more = output.next_token().is_some(),
            "fetched parameter page"
        );
        Ok(ParameterPage::new(parameters, output.next_token().map(str::to_string)))
    }
}

// ============================================================================
// SECTION: Conversion
// ============================================================================

/// Converts an SDK parameter record into a core [`Parameter`].
///
/// A missing type is treated as a plain string.
///
/// # Errors
///
/// Returns [`FetchError::Malformed`] when the record has no name or no value.
pub fn convert_parameter(record: &aws_sdk_ssm::types::Parameter) -> Result<Parameter, FetchError> {
    let name = record
        .name()
        .ok_or_else(|| FetchError::Malformed("parameter without a name".to_string()))?;
    let value = record
        .value()
        .ok_or_else(|| FetchError::Malformed(format!("parameter {name} has no value")))?;
    let kind = record
        .r#type()
        .map_or(ParameterKind::String, |kind| ParameterKind::from_label(kind.as_str()));
    Ok(Parameter::new(name, value, kind))
}

// ============================================================================
// SECTION: Tests
// ============================================================================

#[cfg(test)]
mod tests {
    #![allow(
        clippy::panic,
        clippy::unwrap_used,
        clippy::expect_used,
        reason = "Test fixtures use explicit asserts and unwraps for clarity."
    )]

    use aws_sdk_ssm::types::Parameter as SdkParameter;
    use aws_sdk_ssm::types::ParameterType;

    use super::*;

    #[test]
    fn converts_secure_string() {
        let record = SdkParameter::builder()
            .name("/app/DB_PASSWORD")
            .value("hunter2")
            .r#type(ParameterType::SecureString)
            .build();

        let parameter = convert_parameter(&record).unwrap();

        assert_eq!(parameter.name, "/app/DB_PASSWORD");
        assert_eq!(parameter.value, "hunter2");
        assert!(parameter.is_secret());
    }

    #[test]
    fn converts_string_list_as_plain() {
        let record = SdkParameter::builder()
            .name("/app/HOSTS")
            .value("a,b")
            .r#type(ParameterType::StringList)
            .build();

        let parameter = convert_parameter(&record).unwrap();

        assert_eq!(parameter.kind, ParameterKind::StringList);
        assert!(!parameter.is_secret());
    }

    #[test]
    fn missing_type_is_plain_string() {
        let record = SdkParameter::builder().name("/app/A").value("1").build();

        assert_eq!(convert_parameter(&record).unwrap().kind, ParameterKind::String);
    }

    #[tokio::test]
    async fn from_config_applies_overrides() {
        let config = StoreConfig {
            region: Some("eu-west-1".to_string()),
            endpoint_url: Some("http://localhost:4566".to_string()),
            max_results: Some(5),
        };

        let fetcher = SsmParameterFetcher::from_config(&config).await;

        assert_eq!(
            fetcher.client.config().region().map(ToString::to_string),
            Some("eu-west-1".to_string())
        );
        assert_eq!(fetcher.max_results, Some(5));
    }

    #[test]
    fn rejects_missing_name_or_value() {
        let nameless = SdkParameter::builder().value("1").build();
        let valueless = SdkParameter::builder().name("/app/A").build();

        assert!(matches!(convert_parameter(&nameless), Err(FetchError::Malformed(_))));
        let err = convert_parameter(&valueless).unwrap_err();
        assert!(err.to_string().contains("/app/A"));
    }
}
