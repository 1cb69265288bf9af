// src/client.rs
//! Agents client — the vault's main consumer
//!
//! Holds the decrypted credential in memory only, for as long as the
//! client lives. The completion service and agent registry are passed in
//! at construction; nothing here is process-global.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::aliases::Secret;
use crate::consts::AGENTS_RECORD;
use crate::crypto::CipherProvider;
use crate::error::{ClientError, ClientResult, ServiceError, StoreResult};
use crate::store::KeyValueStore;
use crate::vault::CredentialVault;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgentDefinition {
    pub id: String,
    pub name: String,
    pub description: String,
    pub instructions: String,
    #[serde(default)]
    pub tools: Vec<AgentTool>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentTool {
    pub id: String,
    pub name: String,
    pub description: String,
    #[serde(rename = "type")]
    pub kind: ToolKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToolKind {
    Hosted,
    Function,
    Agent,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgentResponse {
    pub id: String,
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tool_calls: Option<Vec<AgentToolCall>>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgentToolCall {
    pub id: String,
    pub tool_name: String,
    #[serde(default)]
    pub args: serde_json::Map<String, serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<String>,
}

/// Body of an agent-generation request
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateAgentRequest<'a> {
    pub natural_language_definition: &'a str,
    pub agent_name: &'a str,
    pub api_key: &'a str,
}

/// Body of a chat request
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatRequest<'a> {
    pub message: &'a str,
    pub api_key: &'a str,
    pub agent_definition: &'a AgentDefinition,
}

/// The third-party completion API, as seen by the client
pub trait CompletionService {
    fn create_agent(&self, request: &CreateAgentRequest<'_>)
        -> Result<AgentDefinition, ServiceError>;

    fn chat(&self, request: &ChatRequest<'_>) -> Result<AgentResponse, ServiceError>;
}

impl<T: CompletionService + ?Sized> CompletionService for &T {
    fn create_agent(
        &self,
        request: &CreateAgentRequest<'_>,
    ) -> Result<AgentDefinition, ServiceError> {
        (**self).create_agent(request)
    }

    fn chat(&self, request: &ChatRequest<'_>) -> Result<AgentResponse, ServiceError> {
        (**self).chat(request)
    }
}

/// Unencrypted, unvalidated list of agent definitions kept in the store
pub struct AgentRegistry<S> {
    store: S,
}

impl<S: KeyValueStore> AgentRegistry<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// All stored definitions; unreadable data reads as an empty list
    pub fn list(&self) -> Vec<AgentDefinition> {
        let raw = match self.store.get_item(AGENTS_RECORD) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(e) => {
                warn!(error = %e, "failed to read agent registry");
                return Vec::new();
            }
        };
        serde_json::from_str(&raw).unwrap_or_else(|e| {
            warn!(error = %e, "agent registry is not valid JSON, ignoring it");
            Vec::new()
        })
    }

    pub fn find(&self, agent_id: &str) -> Option<AgentDefinition> {
        self.list().into_iter().find(|agent| agent.id == agent_id)
    }

    /// Replace the definition with the same id, or append
    pub fn upsert(&self, agent: &AgentDefinition) -> StoreResult<()> {
        let mut agents = self.list();
        match agents.iter_mut().find(|existing| existing.id == agent.id) {
            Some(existing) => *existing = agent.clone(),
            None => agents.push(agent.clone()),
        }
        let raw = serde_json::to_string(&agents)?;
        self.store.set_item(AGENTS_RECORD, &raw)
    }
}

pub struct AgentsClient<T, S> {
    service: T,
    registry: AgentRegistry<S>,
    api_key: Option<Secret>,
}

impl<T: CompletionService, S: KeyValueStore> AgentsClient<T, S> {
    pub fn new(service: T, registry: AgentRegistry<S>) -> Self {
        Self {
            service,
            registry,
            api_key: None,
        }
    }

    /// Load the credential from `vault`. Returns whether one is now held.
    pub fn initialize<VS, C>(&mut self, vault: &CredentialVault<VS, C>) -> bool
    where
        VS: KeyValueStore,
        C: CipherProvider,
    {
        self.api_key = vault.get();
        let ready = self.api_key.is_some();
        debug!(ready, "agents client initialized");
        ready
    }

    pub fn is_initialized(&self) -> bool {
        self.api_key.is_some()
    }

    pub fn registry(&self) -> &AgentRegistry<S> {
        &self.registry
    }

    /// Ask the completion service to turn a prose description into an
    /// agent definition, and remember the result.
    pub fn create_agent_from_natural_language(
        &self,
        natural_language_definition: &str,
        agent_name: &str,
    ) -> ClientResult<AgentDefinition> {
        let api_key = self.api_key()?;
        let request = CreateAgentRequest {
            natural_language_definition,
            agent_name,
            api_key,
        };
        let agent = self.service.create_agent(&request).map_err(|e| {
            warn!(error = %e, "agent creation failed");
            ClientError::from(e)
        })?;

        if let Err(e) = self.registry.upsert(&agent) {
            warn!(agent_id = %agent.id, error = %e, "failed to store agent definition");
        }
        Ok(agent)
    }

    pub fn chat_with_agent(&self, agent_id: &str, message: &str) -> ClientResult<AgentResponse> {
        let api_key = self.api_key()?;
        let agent = self
            .registry
            .find(agent_id)
            .ok_or_else(|| ClientError::AgentNotFound(agent_id.to_owned()))?;

        let request = ChatRequest {
            message,
            api_key,
            agent_definition: &agent,
        };
        self.service.chat(&request).map_err(|e| {
            warn!(agent_id, error = %e, "chat with agent failed");
            ClientError::from(e)
        })
    }

    pub fn agents(&self) -> Vec<AgentDefinition> {
        self.registry.list()
    }

    fn api_key(&self) -> ClientResult<&str> {
        self.api_key
            .as_ref()
            .map(|key| key.expose_secret().as_str())
            .ok_or(ClientError::NotInitialized)
    }
}
