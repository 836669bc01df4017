use crate::config::env::{Environment, WEBSITE_SITE_NAME_ENV};
use crate::domain::model::{DashboardApp, DashboardConfig, DashboardUser, ServerConfig};
use std::collections::BTreeMap;

pub const DEFAULT_APP_NAME: &str = "Parse Server Azure";

impl DashboardConfig {
    /// One registered app mirroring `server`, and one dashboard user per
    /// app id (user = app id, pass = master key).
    pub fn from_server(server: &ServerConfig, env: &Environment) -> Self {
        let mut users = BTreeMap::new();
        users.insert(server.app_id.clone(), server.master_key.clone());

        Self {
            apps: vec![DashboardApp {
                app_id: server.app_id.clone(),
                server_url: server.server_url.clone(),
                master_key: server.master_key.clone(),
                app_name: env.get_or(WEBSITE_SITE_NAME_ENV, DEFAULT_APP_NAME),
            }],
            users: users
                .into_iter()
                .map(|(user, pass)| DashboardUser { user, pass })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{FilesAdapterChoice, PushAdapterChoice, PushOptions};
    use std::path::PathBuf;

    fn server() -> ServerConfig {
        ServerConfig {
            app_id: "appId".to_string(),
            master_key: "masterKey".to_string(),
            database_uri: "mongodb://localhost:27017/dev".to_string(),
            server_url: "http://localhost:1337/parse".to_string(),
            cloud: PathBuf::from("cloud/main.js"),
            files_adapter: FilesAdapterChoice::Default,
            push: PushOptions {
                adapter: PushAdapterChoice::Default,
            },
        }
    }

    #[test]
    fn test_dashboard_mirrors_server() {
        let dashboard = DashboardConfig::from_server(&server(), &Environment::new());
        assert_eq!(dashboard.apps.len(), 1);
        assert_eq!(dashboard.apps[0].app_name, "Parse Server Azure");
        assert_eq!(dashboard.apps[0].server_url, "http://localhost:1337/parse");
        assert_eq!(
            dashboard.users,
            vec![DashboardUser {
                user: "appId".to_string(),
                pass: "masterKey".to_string(),
            }]
        );
    }

    #[test]
    fn test_app_name_from_site_name() {
        let env = Environment::from_pairs([(WEBSITE_SITE_NAME_ENV, "mysite")]);
        let dashboard = DashboardConfig::from_server(&server(), &env);
        assert_eq!(dashboard.apps[0].app_name, "mysite");
    }
}
