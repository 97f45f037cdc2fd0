use crate::model::notification::{NotificationDto, NotificationKind};

use super::{at, REFERENCE_TIMESTAMP};

fn notification(
    id: &str,
    title: &str,
    message: &str,
    kind: NotificationKind,
    timestamp: i64,
    read: bool,
    action_url: Option<&str>,
) -> NotificationDto {
    NotificationDto {
        id: id.to_string(),
        title: title.to_string(),
        message: message.to_string(),
        kind,
        timestamp: at(timestamp),
        read,
        action_url: action_url.map(str::to_string),
    }
}

pub fn get_all() -> Vec<NotificationDto> {
    vec![
        notification(
            "1",
            "System Maintenance Scheduled",
            "Our system will undergo maintenance on January 20th from 2:00 AM to 4:00 AM UTC. During this time, some features may be unavailable.",
            NotificationKind::Info,
            REFERENCE_TIMESTAMP,
            false,
            Some("/maintenance-schedule"),
        ),
        notification(
            "2",
            "Backup Complete",
            "Your daily backup has been completed successfully. All your data is safely stored and can be restored if needed.",
            NotificationKind::Success,
            1_705_310_100,
            false,
            None,
        ),
        notification(
            "3",
            "Storage Limit Reached",
            "You have reached 95% of your storage limit. Please upgrade your plan or delete unnecessary files to continue.",
            NotificationKind::Warning,
            1_705_308_300,
            true,
            Some("/upgrade-plan"),
        ),
        notification(
            "4",
            "Payment Method Expired",
            "Your payment method will expire in 3 days. Please update your billing information to avoid service interruption.",
            NotificationKind::Error,
            1_705_249_200,
            true,
            Some("/billing"),
        ),
    ]
}
