use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::system::auth::context::{do_login, use_auth};

#[component]
pub fn LoginPage() -> impl IntoView {
    let (_, set_auth_state) = use_auth();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (loading, set_loading) = signal(false);

    let on_submit = move |_| {
        let email_value = email.get();
        let password_value = password.get();

        if email_value.trim().is_empty() || password_value.is_empty() {
            set_error.set(Some("Email dan kata sandi wajib diisi".to_string()));
            return;
        }

        set_loading.set(true);
        set_error.set(None);
        spawn_local(async move {
            match do_login(email_value, password_value, set_auth_state).await {
                Ok(()) => {}
                Err(e) => {
                    set_error.set(Some(format!("Gagal masuk: {}", e)));
                    set_loading.set(false);
                }
            }
        });
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1 class="login-card__title">"EksporLink"</h1>
                <p class="login-card__subtitle">"Platform kesiapan ekspor UMKM"</p>

                {move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

                <div class="form__group">
                    <Label>"Email"</Label>
                    <Input
                        value=email
                        input_type=InputType::Email
                        placeholder="nama@usaha.id"
                        disabled=Signal::derive(move || loading.get())
                    />
                </div>

                <div class="form__group">
                    <Label>"Kata sandi"</Label>
                    <Input
                        value=password
                        input_type=InputType::Password
                        disabled=Signal::derive(move || loading.get())
                    />
                </div>

                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=on_submit
                    disabled=Signal::derive(move || loading.get())
                >
                    {move || if loading.get() { "Memeriksa..." } else { "Masuk" }}
                </Button>
            </div>
        </div>
    }
}
