//! Profiles Views
//!
//! The profile list is held in a [`ProfileBook`] provided at the app root,
//! so profiles added through the form survive navigation between the
//! nested views.

use leptos::*;
use leptos_router::{use_navigate, use_params_map, Outlet, A};

use crate::components::NoticeState;
use crate::models::profile::next_profile_id;
use crate::models::{demo_profiles, Profile, Role};
use crate::router::AppRouter;

/// Profiles shared by the nested profile views
#[derive(Clone, Copy)]
pub struct ProfileBook(pub RwSignal<Vec<Profile>>);

impl ProfileBook {
    pub fn new() -> Self {
        Self(create_rw_signal(demo_profiles()))
    }

    pub fn get(&self, id: u32) -> Option<Profile> {
        self.0.with(|list| list.iter().find(|p| p.id == id).cloned())
    }

    /// Append a profile and return its id
    pub fn add(&self, name: &str, email: &str, role: Role) -> u32 {
        let mut id = 0;
        self.0.update(|list| {
            id = next_profile_id(list);
            list.push(Profile::new(id, name.trim(), email.trim(), role));
        });
        id
    }
}

impl Default for ProfileBook {
    fn default() -> Self {
        Self::new()
    }
}

pub fn provide_profile_book() {
    provide_context(ProfileBook::new());
}

/// Check the new-profile form fields
pub fn validate_profile(name: &str, email: &str) -> Result<(), &'static str> {
    if name.trim().is_empty() {
        return Err("Name is required");
    }
    let email = email.trim();
    match email.split_once('@') {
        Some((user, domain)) if !user.is_empty() && domain.contains('.') => Ok(()),
        _ => Err("Enter a valid email address"),
    }
}

/// Where the form goes once a profile is added: back to the list
fn after_create_path(router: &AppRouter) -> String {
    router.href("Manage Profiles", &[])
}

#[component]
pub fn ProfilesView() -> impl IntoView {
    let router = expect_context::<AppRouter>();

    view! {
        <div class="space-y-6">
            <div class="flex items-center justify-between">
                <h1 class="text-3xl font-bold">"Profiles"</h1>
                <A
                    href=router.href("New Profile", &[])
                    class="px-4 py-2 bg-primary-400 text-white rounded-lg"
                >
                    "+ New profile"
                </A>
            </div>
            <Outlet />
        </div>
    }
}

#[component]
pub fn ProfileList() -> impl IntoView {
    let book = expect_context::<ProfileBook>();
    let router = expect_context::<AppRouter>();

    view! {
        <ul class="space-y-2">
            <For
                each=move || book.0.get()
                key=|p| p.id
                children=move |p| {
                    let href = router.href("Profile Details", &[("id", p.id.to_string().as_str())]);
                    view! {
                        <li class="flex items-center space-x-4 bg-primary-100 rounded-lg px-4 py-3">
                            <span class="w-10 h-10 rounded-full bg-primary-400 text-white flex items-center justify-center">
                                {p.initials()}
                            </span>
                            <A href=href class="flex-1 font-medium">{p.name.clone()}</A>
                            <span class="text-sm text-gray-500">{p.role.label()}</span>
                        </li>
                    }
                }
            />
        </ul>
    }
}

#[component]
pub fn NewUser() -> impl IntoView {
    let book = expect_context::<ProfileBook>();
    let router = expect_context::<AppRouter>();
    let navigate = use_navigate();
    let notice = use_context::<NoticeState>();

    let (name, set_name) = create_signal(String::new());
    let (email, set_email) = create_signal(String::new());
    let (role, set_role) = create_signal(Role::Member);
    let (error, set_error) = create_signal(None::<&'static str>);

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        let (name, email) = (name.get_untracked(), email.get_untracked());
        if let Err(e) = validate_profile(&name, &email) {
            set_error.set(Some(e));
            return;
        }
        set_error.set(None);

        let id = book.add(&name, &email, role.get_untracked());
        tracing::info!(id, "profile created");
        if let Some(notice) = notice {
            notice.show(&format!("Added {}", name.trim()));
        }

        navigate(&after_create_path(&router), Default::default());
    };

    view! {
        <form class="space-y-4 max-w-md" on:submit=on_submit>
            <h2 class="text-xl font-semibold">"New profile"</h2>
            <input
                type="text"
                placeholder="Full name"
                class="w-full rounded-lg px-4 py-2 border border-primary-200"
                prop:value=move || name.get()
                on:input=move |ev| set_name.set(event_target_value(&ev))
            />
            <input
                type="email"
                placeholder="Email"
                class="w-full rounded-lg px-4 py-2 border border-primary-200"
                prop:value=move || email.get()
                on:input=move |ev| set_email.set(event_target_value(&ev))
            />
            <select
                class="w-full rounded-lg px-4 py-2 border border-primary-200"
                on:change=move |ev| set_role.set(Role::from_label(&event_target_value(&ev)))
            >
                {[Role::Member, Role::Manager, Role::Admin]
                    .into_iter()
                    .map(|r| view! { <option value=r.label() selected=move || role.get() == r>{r.label()}</option> })
                    .collect_view()}
            </select>
            {move || error.get().map(|e| view! { <p class="text-red-600 text-sm">{e}</p> })}
            <button type="submit" class="px-4 py-2 bg-primary-400 text-white rounded-lg">
                "Create"
            </button>
        </form>
    }
}

#[component]
pub fn ProfileDetails() -> impl IntoView {
    let book = expect_context::<ProfileBook>();
    let router = expect_context::<AppRouter>();
    let back = router.href("Manage Profiles", &[]);
    let params = use_params_map();

    let profile = move || {
        params
            .with(|p| p.get("id").and_then(|id| id.parse::<u32>().ok()))
            .and_then(|id| book.get(id))
    };

    view! {
        <div class="space-y-4">
            <A href=back class="text-sm text-primary-400">"← All profiles"</A>
            {move || match profile() {
                Some(p) => view! {
                    <div class="bg-primary-100 rounded-xl p-6 space-y-1">
                        <h2 class="text-2xl font-bold">{p.name.clone()}</h2>
                        <div>{p.email.clone()}</div>
                        <div class="text-gray-500">{p.role.label()}</div>
                    </div>
                }
                .into_view(),
                None => view! { <p class="text-gray-400">"That profile could not be found."</p> }
                    .into_view(),
            }}
        </div>
    }
}
