use tracing::{debug, error, info, warn};

/// Logs command start with consistent format
pub fn log_command_start(command: &str, user: &str, user_id: u64, chat_id: i64, details: Option<&str>) {
    match details {
        Some(d) => info!(
            "CMD_START: {} by {}({}) in chat {} - {}",
            command, user, user_id, chat_id, d
        ),
        None => info!(
            "CMD_START: {} by {}({}) in chat {}",
            command, user, user_id, chat_id
        ),
    }
}

/// Logs command completion with consistent format
pub fn log_command_success(command: &str, user: &str, user_id: u64, chat_id: i64, details: Option<&str>) {
    match details {
        Some(d) => info!(
            "CMD_SUCCESS: {} by {}({}) in chat {} - {}",
            command, user, user_id, chat_id, d
        ),
        None => info!(
            "CMD_SUCCESS: {} by {}({}) in chat {}",
            command, user, user_id, chat_id
        ),
    }
}

/// Logs command errors with consistent format
pub fn log_command_error(command: &str, user: &str, user_id: u64, chat_id: i64, error: &str) {
    error!(
        "CMD_ERROR: {} by {}({}) in chat {} - {}",
        command, user, user_id, chat_id, error
    );
}

/// Logs a transition of an administrator's pending reply
pub fn log_reply_event(event: &str, admin_id: u64, target_chat_id: Option<i64>) {
    match target_chat_id {
        Some(target) => info!("REPLY: {} by admin {} for chat {}", event, admin_id, target),
        None => info!("REPLY: {} by admin {}", event, admin_id),
    }
}

/// Logs a failed reply delivery
pub fn log_reply_failure(admin_id: u64, target_chat_id: i64, error: &str) {
    warn!(
        "REPLY: delivery by admin {} to chat {} failed - {}",
        admin_id, target_chat_id, error
    );
}

/// Logs the result of fanning a message out to administrators
pub fn log_relay(kind: &str, from_chat_id: i64, delivered: usize, total: usize) {
    if delivered < total {
        warn!(
            "RELAY: {} from chat {} reached {}/{} admins",
            kind, from_chat_id, delivered, total
        );
    } else {
        debug!(
            "RELAY: {} from chat {} reached {}/{} admins",
            kind, from_chat_id, delivered, total
        );
    }
}

/// Logs system events with consistent format
pub fn log_system_event(event: &str, details: Option<&str>) {
    match details {
        Some(d) => info!("SYSTEM: {} - {}", event, d),
        None => info!("SYSTEM: {}", event),
    }
}
