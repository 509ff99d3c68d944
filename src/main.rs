// SPDX-License-Identifier: MIT

//! NutriLife terminal client.
//!
//! A plain line-oriented front end over the screen controllers: sign in or
//! register, then manage the health profile. All persistence lives in the
//! backend services; this binary only drives the controllers.

use std::io::{self, Write as _};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use nutrilife_client::client::SessionEvents;
use nutrilife_client::config::Config;
use nutrilife_client::models::auth::RegisterRequest;
use nutrilife_client::models::profile::{ActivityLevel, Gender, Goal, Profile, ProfileSearchQuery};
use nutrilife_client::session::FileSessionStore;
use nutrilife_client::ui::{Dashboard, DashboardState, LoginScreen, ProfileForm};
use nutrilife_client::App;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Session-expiry flag set by the transport layer. The navigation decision
/// (back to the sign-in prompt) is made in the main loop, not the transport.
struct ExpiryFlag(AtomicBool);

impl SessionEvents for ExpiryFlag {
    fn session_expired(&self) {
        self.0.store(true, Ordering::SeqCst);
    }
}

impl ExpiryFlag {
    fn take(&self) -> bool {
        self.0.swap(false, Ordering::SeqCst)
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging();

    let config = Config::from_env();
    tracing::info!(
        auth = %config.auth_api_url,
        profile = %config.profile_api_url,
        "Starting NutriLife client"
    );

    let store = Arc::new(FileSessionStore::new(&config.session_dir));
    let expiry = Arc::new(ExpiryFlag(AtomicBool::new(false)));
    let app = App::new(config, store, expiry.clone());

    let mut login = LoginScreen::new(app.auth.clone());
    let mut dashboard = Dashboard::new(app.profiles.clone());

    match app.auth.current_session() {
        Some(session) => println!("Welcome back, {}.", session.user.first_name),
        None => println!("Not signed in. Use `login` or `register`."),
    }
    println!("Type `help` for commands.");

    loop {
        print!("nutrilife> ");
        io::stdout().flush()?;

        let mut line = String::new();
        if io::stdin().read_line(&mut line)? == 0 {
            break; // EOF
        }

        match line.trim() {
            "" => {}
            "help" => print_help(),
            "quit" | "exit" => break,
            "login" => {
                let username = prompt("Username or email")?;
                let password = prompt("Password")?;
                if let Some(session) = login.submit_login(&username, &password).await {
                    println!("Signed in as {}.", session.user.username);
                } else if let Some(error) = login.error() {
                    println!("Error: {}", error);
                }
            }
            "register" => {
                let request = RegisterRequest {
                    username: prompt("Username")?,
                    email: prompt("Email")?,
                    password: prompt("Password")?,
                    first_name: prompt("First name")?,
                    last_name: prompt("Last name")?,
                };
                if let Some(session) = login.submit_register(&request).await {
                    println!("Account created, signed in as {}.", session.user.username);
                } else if let Some(error) = login.error() {
                    println!("Error: {}", error);
                }
            }
            "logout" => {
                app.auth.logout();
                println!("Signed out.");
            }
            "whoami" => match app.auth.current_session() {
                Some(session) => println!(
                    "{} {} <{}> ({})",
                    session.user.first_name,
                    session.user.last_name,
                    session.user.email,
                    session.user.username
                ),
                None => println!("Not signed in."),
            },
            "show" => {
                dashboard.load().await;
                print_dashboard(&dashboard);
            }
            "create" => {
                dashboard.load().await;
                if dashboard.error().is_some() {
                    print_dashboard(&dashboard);
                } else if !matches!(dashboard.state(), DashboardState::NoProfile) {
                    println!("A profile already exists; use `edit`.");
                } else {
                    let mut form = ProfileForm::default();
                    fill_form(&mut form)?;
                    dashboard.submit_create(&form).await;
                    print_dashboard(&dashboard);
                }
            }
            "edit" => {
                dashboard.begin_edit();
                let Some(form) = dashboard.form_mut() else {
                    println!("No profile loaded; run `show` first.");
                    continue;
                };
                fill_form(form)?;
                dashboard.save_edit().await;
                print_dashboard(&dashboard);
            }
            "delete" => {
                if prompt("Delete your profile? Type `yes` to confirm")? == "yes" {
                    dashboard.delete().await;
                    print_dashboard(&dashboard);
                }
            }
            "search" => {
                let query = ProfileSearchQuery {
                    name: non_empty(prompt("Name (blank to skip)")?),
                    goal: Goal::parse(&prompt("Goal (blank to skip)")?),
                    activity_level: ActivityLevel::parse(&prompt(
                        "Activity level (blank to skip)",
                    )?),
                };
                match app.profiles.search(&query).await {
                    Ok(results) => {
                        println!("{} profile(s) found.", results.len());
                        for profile in &results {
                            println!("- {} {}", profile.first_name, profile.last_name);
                        }
                    }
                    Err(e) => println!("Error: {}", e.display_message("Search failed")),
                }
            }
            other => println!("Unknown command `{}`. Type `help`.", other),
        }

        if expiry.take() {
            println!("Session expired, please sign in again.");
        }
    }

    Ok(())
}

fn print_help() {
    println!("Commands:");
    println!("  login     Sign in with username/email and password");
    println!("  register  Create an account");
    println!("  logout    Discard the stored session");
    println!("  whoami    Show the signed-in user");
    println!("  show      Load and display your profile");
    println!("  create    Create your profile");
    println!("  edit      Edit your profile");
    println!("  delete    Delete your profile");
    println!("  search    Search profiles by name, goal, or activity level");
    println!("  quit      Exit");
}

fn print_dashboard(dashboard: &Dashboard) {
    if let Some(error) = dashboard.error() {
        println!("Error: {}", error);
    }
    match dashboard.state() {
        DashboardState::Loading => {}
        DashboardState::NoProfile => {
            println!("No profile yet. Use `create` to set one up.");
        }
        DashboardState::HasProfile(profile) => print_profile(profile),
        DashboardState::Editing { .. } => println!("(still editing)"),
    }
}

fn print_profile(profile: &Profile) {
    println!("{} {}", profile.first_name, profile.last_name);
    if let Some(birth_date) = profile.birth_date {
        match profile.age {
            Some(age) => println!("  Born {} ({} years)", birth_date, age),
            None => println!("  Born {}", birth_date),
        }
    }
    if let Some(gender) = profile.gender {
        println!("  Gender: {}", gender.display_name());
    }
    if let Some(height) = profile.height {
        println!("  Height: {} cm", height);
    }
    if let Some(weight) = profile.weight {
        println!("  Weight: {} kg", weight);
    }
    if let Some(target) = profile.target_weight {
        println!("  Target weight: {} kg", target);
    }
    if let Some(level) = profile.activity_level {
        println!("  Activity: {}", level.display_name());
    }
    if let Some(goal) = profile.goal {
        println!("  Goal: {}", goal.display_name());
    }
    if let Some(calories) = profile.daily_calorie_goal {
        println!("  Daily calorie goal: {} kcal", calories);
    }
    // Server-computed metrics
    if let (Some(bmi), Some(category)) = (profile.bmi, profile.bmi_category.as_deref()) {
        println!("  BMI: {} ({})", bmi, category);
    }
    if let Some(bmr) = profile.bmr {
        println!("  BMR: {} kcal/day", bmr);
    }
    if let Some(tdee) = profile.tdee {
        println!("  TDEE: {} kcal/day", tdee);
    }
    if let Some(allergies) = profile.allergies.as_deref() {
        println!("  Allergies: {}", allergies);
    }
    if let Some(conditions) = profile.medical_conditions.as_deref() {
        println!("  Medical conditions: {}", conditions);
    }
    if let Some(preferences) = profile.dietary_preferences.as_deref() {
        println!("  Dietary preferences: {}", preferences);
    }
    if let Some(bio) = profile.bio.as_deref() {
        println!("  Bio: {}", bio);
    }
}

/// Prompt for each editable field; blank input keeps the current value.
fn fill_form(form: &mut ProfileForm) -> io::Result<()> {
    edit_text("First name", &mut form.first_name)?;
    edit_text("Last name", &mut form.last_name)?;
    edit_text("Phone number", &mut form.phone_number)?;
    edit_text("Birth date (YYYY-MM-DD)", &mut form.birth_date)?;

    let gender_options = Gender::ALL
        .iter()
        .map(|g| g.display_name())
        .collect::<Vec<_>>()
        .join(", ");
    if let Some(input) = non_empty(prompt(&format!("Gender ({})", gender_options))?) {
        form.gender = Gender::parse(&input);
    }

    edit_text("Height in cm", &mut form.height)?;
    edit_text("Weight in kg", &mut form.weight)?;
    edit_text("Target weight in kg", &mut form.target_weight)?;

    if let Some(input) = non_empty(prompt(
        "Activity level (SEDENTARY/LIGHTLY_ACTIVE/MODERATELY_ACTIVE/VERY_ACTIVE/EXTRA_ACTIVE)",
    )?) {
        form.activity_level = ActivityLevel::parse(&input);
    }
    if let Some(input) = non_empty(prompt(
        "Goal (WEIGHT_LOSS/WEIGHT_GAIN/WEIGHT_MAINTENANCE/MUSCLE_GAIN/GENERAL_HEALTH)",
    )?) {
        form.goal = Goal::parse(&input);
    }

    edit_text("Daily calorie goal", &mut form.daily_calorie_goal)?;
    edit_text("Allergies (comma-separated)", &mut form.allergies)?;
    edit_text("Medical conditions", &mut form.medical_conditions)?;
    edit_text("Dietary preferences", &mut form.dietary_preferences)?;
    edit_text("Picture URL", &mut form.profile_picture_url)?;
    edit_text("Bio", &mut form.bio)?;
    Ok(())
}

fn edit_text(label: &str, field: &mut String) -> io::Result<()> {
    let shown = if field.is_empty() {
        label.to_string()
    } else {
        format!("{} [{}]", label, field)
    };
    if let Some(value) = non_empty(prompt(&shown)?) {
        *field = value;
    }
    Ok(())
}

fn prompt(label: &str) -> io::Result<String> {
    print!("{}: ", label);
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    Ok(line.trim().to_string())
}

fn non_empty(value: String) -> Option<String> {
    (!value.is_empty()).then_some(value)
}

/// Initialize logging; quiet by default, overridable via `RUST_LOG`.
fn init_logging() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("nutrilife_client=warn".parse().unwrap()),
        )
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();
}
