use aws_config::{BehaviorVersion, Region, SdkConfig};
use tracing::debug;

/// Region the tool is pinned to.
pub const DEFAULT_REGION: &str = "eu-west-2";

#[derive(Debug, Clone)]
pub struct AwsConfig {
    pub region: String,
    /// Shared-config profile; `None` uses the default credential chain.
    pub profile: Option<String>,
}

impl Default for AwsConfig {
    fn default() -> Self {
        Self {
            region: DEFAULT_REGION.to_string(),
            profile: None,
        }
    }
}

impl AwsConfig {
    pub fn with_profile(mut self, profile: Option<String>) -> Self {
        self.profile = profile.filter(|p| !p.is_empty());
        self
    }

    /// Resolve SDK settings (credentials, endpoints) for this region and profile.
    pub async fn load(&self) -> SdkConfig {
        debug!(target: "dock.aws", region = %self.region, profile = ?self.profile, "loading sdk config");
        let mut loader =
            aws_config::defaults(BehaviorVersion::latest()).region(Region::new(self.region.clone()));
        if let Some(profile) = &self.profile {
            loader = loader.profile_name(profile);
        }
        loader.load().await
    }
}
