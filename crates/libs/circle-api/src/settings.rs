//! User and project settings endpoints: following, keys, environment, caches.

use serde_json::{Value, json};

use crate::{
    Api,
    endpoint::Endpoint,
    prelude::*,
    project::{KeyType, Project},
};

impl Api {
    /// Information about the signed in user.
    pub fn get_user_info(&self) -> Result<Value> {
        self.execute(&Endpoint::get("me"))
    }

    /// Every project the signed in user follows.
    pub fn get_projects(&self) -> Result<Value> {
        self.execute(&Endpoint::get("projects"))
    }

    /// Follows a new project.
    pub fn follow_project(&self, project: &Project) -> Result<Value> {
        self.execute(&Endpoint::post(project.path_to("follow")))
    }

    /// Adds a Heroku API key to the signed in user.
    pub fn add_heroku_key(&self, apikey: &str) -> Result<Value> {
        let endpoint = Endpoint::post("user/heroku-key").json(&json!({ "apikey": apikey }))?;
        self.execute(&endpoint)
    }

    /// Creates an SSH key used to access external systems.
    pub fn add_ssh_key(
        &self,
        project: &Project,
        private_key: &str,
        hostname: Option<&str>,
    ) -> Result<Value> {
        let endpoint = Endpoint::post(project.path_to("ssh-key")).json(&json!({
            "hostname": hostname,
            "private_key": private_key,
        }))?;
        self.execute(&endpoint)
    }

    /// Checkout keys of a project.
    pub fn list_checkout_keys(&self, project: &Project) -> Result<Value> {
        self.execute(&Endpoint::get(project.path_to("checkout-key")))
    }

    /// Creates a new checkout key.
    pub fn create_checkout_key(&self, project: &Project, key_type: KeyType) -> Result<Value> {
        let endpoint =
            Endpoint::post(project.path_to("checkout-key")).json(&json!({ "type": key_type }))?;
        self.execute(&endpoint)
    }

    /// A single checkout key by fingerprint.
    pub fn get_checkout_key(&self, project: &Project, fingerprint: &str) -> Result<Value> {
        self.execute(&Endpoint::get(
            project.path_to(format!("checkout-key/{fingerprint}")),
        ))
    }

    /// Deletes a checkout key by fingerprint.
    pub fn delete_checkout_key(&self, project: &Project, fingerprint: &str) -> Result<Value> {
        self.execute(&Endpoint::delete(
            project.path_to(format!("checkout-key/{fingerprint}")),
        ))
    }

    /// Environment variables of a project. Values come back masked.
    pub fn list_envvars(&self, project: &Project) -> Result<Value> {
        self.execute(&Endpoint::get(project.path_to("envvar")))
    }

    /// Adds an environment variable to a project.
    pub fn add_envvar(&self, project: &Project, name: &str, value: &str) -> Result<Value> {
        let endpoint = Endpoint::post(project.path_to("envvar")).json(&json!({
            "name": name,
            "value": value,
        }))?;
        self.execute(&endpoint)
    }

    /// A single environment variable, value masked.
    pub fn get_envvar(&self, project: &Project, name: &str) -> Result<Value> {
        self.execute(&Endpoint::get(project.path_to(format!("envvar/{name}"))))
    }

    /// Deletes an environment variable.
    pub fn delete_envvar(&self, project: &Project, name: &str) -> Result<Value> {
        self.execute(&Endpoint::delete(project.path_to(format!("envvar/{name}"))))
    }

    /// Clears the dependency cache of a project.
    pub fn clear_cache(&self, project: &Project) -> Result<Value> {
        self.execute(&Endpoint::delete(project.path_to("build-cache")))
    }
}
