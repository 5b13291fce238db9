// SPDX-License-Identifier: MPL-2.0
use iced_notify::clock::{Clock, ManualClock};
use iced_notify::config::{self, Config, NotificationConfig};
use iced_notify::i18n::I18n;
use iced_notify::presenter::{DialogService, Message, Presenter};
use iced_notify::ui::lifecycle::Phase;
use iced_notify::ui::notifications::{Category, Notification};
use std::time::Duration;
use tempfile::tempdir;

fn presenter_with(config: &Config, lang: &str) -> (ManualClock, Presenter) {
    let clock = ManualClock::new();
    let i18n = I18n::new(Some(lang.to_string()), config);
    let presenter = Presenter::with_clock(clock.clone(), i18n, config);
    (clock, presenter)
}

fn presenter() -> (ManualClock, Presenter) {
    presenter_with(&Config::default(), "en-US")
}

#[test]
fn test_language_change_via_config() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("settings.toml");

    let mut config = Config::default();
    config.general.language = Some("fr".to_string());
    config::save_to_path(&config, &path).expect("Failed to write config file");

    let loaded = config::load_from_path(&path).expect("Failed to load config from path");
    let i18n = I18n::new(None, &loaded);
    assert_eq!(i18n.current_locale().to_string(), "fr");

    let clock = ManualClock::new();
    let mut presenter = Presenter::with_clock(clock, i18n, &loaded);
    let id = presenter.notify(Notification::success("Profil enregistré"));
    assert_eq!(presenter.toast(id).map(|entry| entry.title()), Some("Succès"));
}

#[test]
fn test_configured_duration_applies_to_plain_notify() {
    let config = Config {
        notifications: NotificationConfig {
            duration_ms: Some(2000),
            ..NotificationConfig::default()
        },
        ..Config::default()
    };
    let (clock, mut presenter) = presenter_with(&config, "en-US");
    let id = presenter.notify(Notification::info("short"));

    clock.advance(Duration::from_millis(2000));
    presenter.tick();
    assert_eq!(presenter.toast(id).map(|entry| entry.phase()), Some(Phase::Exiting));

    // Shortcuts keep the fixed seven seconds.
    let shortcut = presenter.info("long", None);
    assert_eq!(
        presenter.toast(shortcut).map(|entry| entry.duration()),
        Some(Duration::from_millis(7000))
    );
}

#[test]
fn test_profile_saved_lifecycle() {
    let (clock, mut presenter) = presenter();
    let id = presenter
        .try_notify("Profile saved", "success")
        .expect("success is a valid kind");

    let entry = presenter.toast(id).expect("toast shown");
    assert_eq!(entry.title(), "Success");
    assert_eq!(entry.category(), Category::Success);
    assert_eq!(entry.phase(), Phase::Entering);

    clock.advance(Duration::from_millis(10));
    presenter.tick();
    assert_eq!(presenter.toast(id).map(|entry| entry.phase()), Some(Phase::Visible));

    clock.advance(Duration::from_millis(7389));
    presenter.tick();
    assert!(presenter.toast(id).is_some(), "still exiting inside the window");

    clock.advance(Duration::from_millis(1));
    presenter.tick();
    assert!(presenter.toast(id).is_none());
}

#[test]
fn test_removal_bounds_with_coarse_ticks() {
    let (clock, mut presenter) = presenter();
    let start = clock.now();
    let id = presenter.error("Upload failed", None);

    let mut removed_at = None;
    for _ in 0..200 {
        clock.advance(Duration::from_millis(50));
        presenter.tick();
        if presenter.toast(id).is_none() {
            removed_at = Some(clock.now() - start);
            break;
        }
    }

    let removed_at = removed_at.expect("toast should be removed eventually");
    assert!(removed_at >= Duration::from_millis(7000));
    assert!(removed_at <= Duration::from_millis(7400));
}

#[test]
fn test_manual_close_prevents_second_removal() {
    let (clock, mut presenter) = presenter();
    let closed = presenter.warning("Low storage", None);
    let other = presenter.warning("Also queued", None);

    clock.advance(Duration::from_millis(500));
    presenter.update(Message::CloseNotification(closed));
    presenter.update(Message::CloseNotification(closed));

    clock.advance(Duration::from_millis(400));
    presenter.tick();
    assert!(presenter.toast(closed).is_none());

    // The cancelled deadline passing later does nothing for the closed toast.
    clock.advance(Duration::from_millis(7000));
    presenter.tick();
    assert!(!presenter.close(closed));
    assert_eq!(presenter.toasts().map(|toasts| toasts.len()), Some(0));
    assert!(presenter.toast(other).is_none());
}

#[test]
fn test_toasts_are_independent() {
    let (clock, mut presenter) = presenter();
    let first = presenter.info("first", None);
    clock.advance(Duration::from_millis(3000));
    let second = presenter.info("second", None);

    clock.advance(Duration::from_millis(4400));
    presenter.tick();
    assert!(presenter.toast(first).is_none());
    assert_eq!(
        presenter.toast(second).map(|entry| entry.phase()),
        Some(Phase::Visible)
    );
}

#[test]
fn test_invalid_kind_is_reported() {
    let (_clock, mut presenter) = presenter();
    assert!(presenter.try_notify("oops", "critical").is_err());
    assert!(presenter.toasts().is_none());
    assert_eq!(presenter.styles_registered(), 0);
}

#[test]
fn test_dialog_service_is_usable_generically() {
    fn report(service: &mut impl DialogService) {
        service.alert("Connection lost");
    }

    let (_clock, mut presenter) = presenter();
    report(&mut presenter);

    let titles: Vec<String> = presenter
        .toasts()
        .map(|toasts| toasts.iter().map(|entry| entry.title().to_owned()).collect())
        .unwrap_or_default();
    assert_eq!(titles, ["Alert"]);
}

#[test]
fn test_french_dialog_defaults() {
    let (_clock, mut presenter) = presenter_with(&Config::default(), "fr");
    let pending = presenter.confirm("Supprimer ?");

    let dialog = presenter.dialogs().get(pending.id()).expect("dialog open");
    assert_eq!(dialog.text().confirm_label, "Confirmer");
    assert_eq!(dialog.text().cancel_label, "Annuler");
}

#[test]
fn test_sticky_notification_waits_for_close() {
    let (clock, mut presenter) = presenter();
    let id = presenter.notify(Notification::info("sticky").auto_dismiss(Duration::MAX));

    clock.advance(Duration::from_secs(24 * 60 * 60));
    presenter.tick();
    assert_eq!(presenter.toast(id).map(|entry| entry.phase()), Some(Phase::Visible));

    assert!(presenter.close(id));
    clock.advance(Duration::from_millis(400));
    presenter.tick();
    assert!(presenter.toast(id).is_none());
}
