use crate::config::env::{
    Environment, NOTIFICATION_HUB_CONNECTION_STRING_ENV, NOTIFICATION_HUB_NAME_ENV,
    WEBSITE_SITE_NAME_ENV,
};
use crate::domain::model::{AzurePushCredentials, PushAdapterChoice, PushConfig};
use crate::utils::validation::{required_fields_present, RequiredField};

impl PushConfig {
    /// Hub name comes from `MS_NotificationHubName`, else `<site name>-hub`.
    pub fn from_env(env: &Environment) -> Self {
        let hub_name = env
            .get(NOTIFICATION_HUB_NAME_ENV)
            .map(str::to_string)
            .or_else(|| env.get(WEBSITE_SITE_NAME_ENV).map(|site| format!("{}-hub", site)));

        Self {
            hub_name,
            connection_string: env
                .get(NOTIFICATION_HUB_CONNECTION_STRING_ENV)
                .map(str::to_string),
        }
    }

    pub fn required_fields(&self) -> [RequiredField<'_>; 2] {
        [
            ("HubName", self.hub_name.as_deref()),
            ("ConnectionString", self.connection_string.as_deref()),
        ]
    }

    pub fn adapter_choice(&self) -> PushAdapterChoice {
        let present = required_fields_present(&self.required_fields());

        match (&self.hub_name, &self.connection_string) {
            (Some(hub_name), Some(connection_string)) if present => {
                PushAdapterChoice::Azure(AzurePushCredentials {
                    hub_name: hub_name.clone(),
                    connection_string: connection_string.clone(),
                })
            }
            _ => PushAdapterChoice::Default,
        }
    }
}
