//! Provider credential records and the settings keys they are read from

use std::fmt;

use serde::{Deserialize, Serialize};

/// A settings key recognised by the resolver
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CredentialKey {
    OpenAiApiKey,
    OpenAiOrgId,
    AzureDeploymentName,
    AzureApiKey,
    AzureEndpoint,
}

impl CredentialKey {
    /// Name of the key in a dotenv file or the process environment
    pub fn as_str(&self) -> &'static str {
        match self {
            CredentialKey::OpenAiApiKey => "OPENAI_API_KEY",
            CredentialKey::OpenAiOrgId => "OPENAI_ORG_ID",
            CredentialKey::AzureDeploymentName => "AZURE_OPENAI_DEPLOYMENT_NAME",
            CredentialKey::AzureApiKey => "AZURE_OPENAI_API_KEY",
            CredentialKey::AzureEndpoint => "AZURE_OPENAI_ENDPOINT",
        }
    }

    /// Human-readable label used in error messages
    pub fn label(&self) -> &'static str {
        match self {
            CredentialKey::OpenAiApiKey => "OpenAI API key",
            CredentialKey::OpenAiOrgId => "OpenAI organization ID",
            CredentialKey::AzureDeploymentName => "Azure OpenAI deployment name",
            CredentialKey::AzureApiKey => "Azure OpenAI API key",
            CredentialKey::AzureEndpoint => "Azure OpenAI endpoint",
        }
    }
}

impl fmt::Display for CredentialKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Connection parameters for the OpenAI API
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpenAICredentials {
    /// Never empty once resolved
    pub api_key: String,
    /// Organization to bill; optional
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub org_id: Option<String>,
}

/// Connection parameters for an Azure OpenAI deployment
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AzureOpenAICredentials {
    /// Empty when the caller resolved without requiring a deployment and none was set
    pub deployment_name: String,
    pub api_key: String,
    pub endpoint: String,
}

const REDACTED: &str = "<redacted>";

impl fmt::Debug for OpenAICredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OpenAICredentials")
            .field("api_key", &REDACTED)
            .field("org_id", &self.org_id)
            .finish()
    }
}

impl fmt::Debug for AzureOpenAICredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AzureOpenAICredentials")
            .field("deployment_name", &self.deployment_name)
            .field("api_key", &REDACTED)
            .field("endpoint", &self.endpoint)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_names_match_dotenv_contract() {
        assert_eq!(CredentialKey::OpenAiApiKey.as_str(), "OPENAI_API_KEY");
        assert_eq!(CredentialKey::OpenAiOrgId.as_str(), "OPENAI_ORG_ID");
        assert_eq!(CredentialKey::AzureDeploymentName.as_str(), "AZURE_OPENAI_DEPLOYMENT_NAME");
        assert_eq!(CredentialKey::AzureApiKey.as_str(), "AZURE_OPENAI_API_KEY");
        assert_eq!(CredentialKey::AzureEndpoint.as_str(), "AZURE_OPENAI_ENDPOINT");
        assert_eq!(CredentialKey::AzureEndpoint.to_string(), "AZURE_OPENAI_ENDPOINT");
    }

    #[test]
    fn test_debug_redacts_api_keys() {
        let openai = OpenAICredentials {
            api_key: "sk-secret".to_string(),
            org_id: Some("org-1".to_string()),
        };
        let rendered = format!("{:?}", openai);
        assert!(!rendered.contains("sk-secret"));
        assert!(rendered.contains("org-1"));

        let azure = AzureOpenAICredentials {
            deployment_name: "gpt-35".to_string(),
            api_key: "azure-secret".to_string(),
            endpoint: "https://example.openai.azure.com".to_string(),
        };
        let rendered = format!("{:?}", azure);
        assert!(!rendered.contains("azure-secret"));
        assert!(rendered.contains("gpt-35"));
    }

    #[test]
    fn test_openai_credentials_json_omits_missing_org() {
        let creds = OpenAICredentials {
            api_key: "sk-1".to_string(),
            org_id: None,
        };
        let json = serde_json::to_value(&creds).unwrap();
        assert_eq!(json, serde_json::json!({ "api_key": "sk-1" }));
    }
}
