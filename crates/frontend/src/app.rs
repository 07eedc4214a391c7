use crate::layout::global_context::AppGlobalContext;
use crate::layout::modal::ModalService;
use crate::layout::toast::Toasts;
use crate::routes::AppRoutes;
use crate::system::auth::context::AuthProvider;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // App-wide stores live at the root so every tab shares one instance.
    provide_context(AppGlobalContext::new());
    provide_context(ModalService::new());
    provide_context(Toasts::new());

    view! {
        <AuthProvider>
            <AppRoutes />
        </AuthProvider>
    }
}
