//! Application dependency grouping and use case accessors

use std::sync::Arc;

use ll_core::ports::{MenuRepositoryPort, PreferenceStorePort, RemoteMenuPort};

use crate::usecases::{
    BootstrapMenu, BrowseMenu, CompleteOnboarding, GetProfile, Logout, RemoveAvatar,
    ResolveSession, SaveProfile,
};

/// Port implementations the app is wired with.
///
/// Not a builder: just parameter grouping. All dependencies are required,
/// with no defaults and no hidden construction logic. The struct literal is
/// the dependency manifest.
pub struct AppDeps {
    pub prefs: Arc<dyn PreferenceStorePort>,
    pub menu_repo: Arc<dyn MenuRepositoryPort>,
    pub remote_menu: Arc<dyn RemoteMenuPort>,
}

/// The assembled application: one accessor per use case.
pub struct App {
    deps: AppDeps,
}

impl App {
    pub fn new(deps: AppDeps) -> Self {
        Self { deps }
    }

    pub fn resolve_session(&self) -> ResolveSession {
        ResolveSession::new(self.deps.prefs.clone())
    }

    pub fn complete_onboarding(&self) -> CompleteOnboarding {
        CompleteOnboarding::new(self.deps.prefs.clone())
    }

    pub fn bootstrap_menu(&self) -> BootstrapMenu {
        BootstrapMenu::new(self.deps.menu_repo.clone(), self.deps.remote_menu.clone())
    }

    pub fn browse_menu(&self) -> BrowseMenu {
        BrowseMenu::new(self.deps.menu_repo.clone())
    }

    pub fn get_profile(&self) -> GetProfile {
        GetProfile::new(self.deps.prefs.clone())
    }

    pub fn save_profile(&self) -> SaveProfile {
        SaveProfile::new(self.deps.prefs.clone())
    }

    pub fn remove_avatar(&self) -> RemoveAvatar {
        RemoveAvatar::new(self.deps.prefs.clone())
    }

    pub fn logout(&self) -> Logout {
        Logout::new(self.deps.prefs.clone())
    }
}
