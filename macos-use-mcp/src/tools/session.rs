use super::prelude::*;
use super::stringify_values;
use serde_json::{Map, Value};

#[derive(Debug, Deserialize, JsonSchema)]
pub struct CreateSessionArgs {
    #[serde(default)]
    #[schemars(description = "Optional ID for the new session")]
    session_id: String,
    #[serde(default)]
    display_name: String,
    #[serde(default)]
    #[schemars(description = "Free-form key/value labels")]
    metadata: Map<String, Value>,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct SessionNameArgs {
    #[schemars(description = "Session resource name (sessions/{id})")]
    name: String,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct DeleteSessionArgs {
    #[schemars(description = "Session resource name (sessions/{id})")]
    name: String,
    #[serde(default)]
    force: bool,
}

#[derive(Debug, Clone, Copy, Default, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Isolation {
    #[default]
    Serializable,
    ReadCommitted,
}

impl From<Isolation> for IsolationLevel {
    fn from(isolation: Isolation) -> Self {
        match isolation {
            Isolation::Serializable => IsolationLevel::Serializable,
            Isolation::ReadCommitted => IsolationLevel::ReadCommitted,
        }
    }
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct BeginTransactionArgs {
    #[schemars(description = "Session resource name (sessions/{id})")]
    session: String,
    #[schemars(description = "Default: serializable")]
    isolation_level: Option<Isolation>,
    #[serde(default)]
    #[schemars(description = "Seconds before the transaction is rolled back automatically")]
    timeout: f64,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct CommitArgs {
    #[schemars(description = "Session resource name (sessions/{id})")]
    name: String,
    transaction_id: String,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct RollbackArgs {
    #[schemars(description = "Session resource name (sessions/{id})")]
    name: String,
    transaction_id: String,
    #[serde(default)]
    #[schemars(description = "Revision to roll back to (default: start of the transaction)")]
    revision_id: String,
}

fn session_state(state: i32) -> &'static str {
    match SessionState::try_from(state) {
        Ok(SessionState::Active) => "active",
        Ok(SessionState::InTransaction) => "in transaction",
        Ok(SessionState::Expired) => "expired",
        Ok(SessionState::Failed) => "failed",
        _ => "unspecified",
    }
}

fn transaction_state(state: i32) -> &'static str {
    match TransactionState::try_from(state) {
        Ok(TransactionState::Active) => "active",
        Ok(TransactionState::Committed) => "committed",
        Ok(TransactionState::RolledBack) => "rolled back",
        Ok(TransactionState::Failed) => "failed",
        _ => "unspecified",
    }
}

fn format_session(session: &Session) -> String {
    let mut text = format!("{} [{}]", session.name, session_state(session.state));
    if !session.display_name.is_empty() {
        let _ = write!(text, " \"{}\"", session.display_name);
    }
    let _ = write!(
        text,
        "\n  created {}, last access {}, expires {}",
        format_timestamp(session.create_time.as_ref()),
        format_timestamp(session.last_access_time.as_ref()),
        format_timestamp(session.expire_time.as_ref()),
    );
    if !session.transaction_id.is_empty() {
        let _ = write!(text, "\n  transaction: {}", session.transaction_id);
    }
    if !session.metadata.is_empty() {
        let mut entries: Vec<_> = session.metadata.iter().collect();
        entries.sort();
        let labels: Vec<String> = entries.iter().map(|(k, v)| format!("{k}={v}")).collect();
        let _ = write!(text, "\n  metadata: {}", labels.join(", "));
    }
    text
}

fn format_transaction(transaction: &Transaction) -> String {
    let mut text = format!(
        "Transaction {} on {} [{}], started {}",
        transaction.transaction_id,
        transaction.session,
        transaction_state(transaction.state),
        format_timestamp(transaction.start_time.as_ref()),
    );
    if transaction.end_time.is_some() {
        let _ = write!(
            text,
            ", ended {}",
            format_timestamp(transaction.end_time.as_ref())
        );
    }
    text
}

/// A commit or rollback that left the transaction failed is a tool error.
fn transaction_result(tool: &str, transaction: &Transaction) -> ToolOutcome {
    if transaction.state == TransactionState::Failed as i32 {
        return Err(ToolError::failed(format!(
            "Error in {tool}: {}",
            format_transaction(transaction)
        )));
    }
    Ok(text_result(format_transaction(transaction)))
}

#[tool_router(router = session_router, vis = "pub(crate)")]
impl MacosUseServer {
    #[tool(
        description = "Create a session that groups related automation work and can hold a transaction."
    )]
    async fn create_session(&self, Parameters(args): Parameters<CreateSessionArgs>) -> ToolOutcome {
        const TOOL: &str = "create_session";
        let request = CreateSessionRequest {
            session: Some(Session {
                display_name: args.display_name,
                metadata: stringify_values(args.metadata),
                ..Default::default()
            }),
            session_id: args.session_id,
        };
        let session = self
            .call(TOOL, self.client().create_session(request))
            .await?;
        Ok(text_result(format!("Created session {}", format_session(&session))))
    }

    #[tool(description = "Get a session. Read-only.")]
    async fn get_session(&self, Parameters(args): Parameters<SessionNameArgs>) -> ToolOutcome {
        let session = self
            .call(
                "get_session",
                self.client()
                    .get_session(GetSessionRequest { name: args.name }),
            )
            .await?;
        Ok(text_result(format_session(&session)))
    }

    #[tool(description = "List sessions. Read-only.")]
    async fn list_sessions(&self, Parameters(page): Parameters<PageArgs>) -> ToolOutcome {
        let request = ListSessionsRequest {
            page_size: page.page_size.unwrap_or_default(),
            page_token: page.page_token,
        };
        let response = self
            .call("list_sessions", self.client().list_sessions(request))
            .await?;

        if response.sessions.is_empty() {
            return Ok(text_result("No sessions found"));
        }
        let mut text = format!("Found {} sessions:", response.sessions.len());
        for session in &response.sessions {
            let _ = write!(text, "\n{}", format_session(session));
        }
        push_next_page(&mut text, &response.next_page_token);
        Ok(text_result(text))
    }

    #[tool(description = "Delete a session. With force, an open transaction is rolled back first.")]
    async fn delete_session(&self, Parameters(args): Parameters<DeleteSessionArgs>) -> ToolOutcome {
        let request = DeleteSessionRequest {
            name: args.name.clone(),
            force: args.force,
        };
        self.call("delete_session", self.client().delete_session(request))
            .await?;
        Ok(text_result(format!("Deleted session {}", args.name)))
    }

    #[tool(
        description = "Begin a transaction in a session. Returns the transaction_id used by commit/rollback."
    )]
    async fn begin_transaction(
        &self,
        Parameters(args): Parameters<BeginTransactionArgs>,
    ) -> ToolOutcome {
        const TOOL: &str = "begin_transaction";
        let isolation_level = IsolationLevel::from(args.isolation_level.unwrap_or_default());
        let request = BeginTransactionRequest {
            session: args.session.clone(),
            isolation_level: isolation_level as i32,
            timeout: args.timeout.max(0.0),
        };
        let response = self
            .call(TOOL, self.client().begin_transaction(request))
            .await?;

        if response.transaction_id.is_empty() {
            return Err(ToolError::failed(format!(
                "Error in {TOOL}: no transaction was started on {}",
                args.session
            )));
        }
        Ok(text_result(format!(
            "Began transaction {} on {}",
            response.transaction_id, args.session
        )))
    }

    #[tool(description = "Commit a session's transaction.")]
    async fn commit_transaction(&self, Parameters(args): Parameters<CommitArgs>) -> ToolOutcome {
        const TOOL: &str = "commit_transaction";
        let request = CommitTransactionRequest {
            name: args.name,
            transaction_id: args.transaction_id,
        };
        let transaction = self
            .call(TOOL, self.client().commit_transaction(request))
            .await?;
        transaction_result(TOOL, &transaction)
    }

    #[tool(description = "Roll back a session's transaction, optionally only to a revision.")]
    async fn rollback_transaction(
        &self,
        Parameters(args): Parameters<RollbackArgs>,
    ) -> ToolOutcome {
        const TOOL: &str = "rollback_transaction";
        let request = RollbackTransactionRequest {
            name: args.name,
            transaction_id: args.transaction_id,
            revision_id: args.revision_id,
        };
        let transaction = self
            .call(TOOL, self.client().rollback_transaction(request))
            .await?;
        transaction_result(TOOL, &transaction)
    }

    #[tool(description = "Get a session with its applications and operation history. Read-only.")]
    async fn get_session_snapshot(
        &self,
        Parameters(args): Parameters<SessionNameArgs>,
    ) -> ToolOutcome {
        let snapshot = self
            .call(
                "get_session_snapshot",
                self.client()
                    .get_session_snapshot(GetSessionSnapshotRequest { name: args.name }),
            )
            .await?;

        let mut text = match &snapshot.session {
            Some(session) => format_session(session),
            None => "Session snapshot".to_string(),
        };
        if snapshot.applications.is_empty() {
            text.push_str("\nApplications: none");
        } else {
            let _ = write!(text, "\nApplications: {}", snapshot.applications.join(", "));
        }
        if !snapshot.history.is_empty() {
            let _ = write!(text, "\nHistory ({} operations):", snapshot.history.len());
            for record in &snapshot.history {
                let outcome = if record.success { "ok" } else { "failed" };
                let _ = write!(
                    text,
                    "\n  {} {} {} [{}]",
                    format_timestamp(record.operation_time.as_ref()),
                    record.operation_type,
                    record.resource,
                    outcome
                );
                if !record.error.is_empty() {
                    let _ = write!(text, ": {}", record.error);
                }
            }
        }
        Ok(text_result(text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_session_sorts_metadata() {
        let session = Session {
            name: "sessions/s1".into(),
            state: SessionState::InTransaction as i32,
            metadata: [("b".to_string(), "2".to_string()), ("a".to_string(), "1".to_string())]
                .into_iter()
                .collect(),
            ..Default::default()
        };
        let text = format_session(&session);
        assert!(text.starts_with("sessions/s1 [in transaction]"));
        assert!(text.ends_with("metadata: a=1, b=2"));
    }

    #[test]
    fn test_failed_commit_is_error() {
        let transaction = Transaction {
            transaction_id: "t1".into(),
            session: "sessions/s1".into(),
            state: TransactionState::Failed as i32,
            ..Default::default()
        };
        let err = transaction_result("commit_transaction", &transaction).unwrap_err();
        assert!(err
            .to_string()
            .starts_with("Error in commit_transaction: Transaction t1 on sessions/s1 [failed]"));
    }
}
