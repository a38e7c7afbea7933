mod common;

use common::capture_logs;
use modal_facade::{
    ConsoleHost, ImplementationUpdate, ModalHandle, ModalOptions, ModalOptionsPatch, Opaque,
    UiModalService,
};
use serde_json::json;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

fn recording_show(service: &UiModalService) -> Arc<Mutex<Vec<ModalOptions>>> {
    let calls: Arc<Mutex<Vec<ModalOptions>>> = Arc::default();
    let sink = Arc::clone(&calls);
    service.set_service_implementation(ImplementationUpdate::new().show(move |options| {
        sink.lock().unwrap().push(options);
        None
    }));
    calls
}

#[test]
fn test_show_forwards_fully_populated_options() {
    let service = UiModalService::new();
    let calls = recording_show(&service);

    service.show(ModalOptionsPatch::new().with_title("A"));

    let expected = ModalOptions {
        content: None,
        content_props: None,
        should_close_on_esc: true,
        is_open: true,
        close_button: true,
        title: Some("A".to_string()),
        custom_class_name: None,
        movable: false,
        container_dimensions: None,
        content_dimensions: None,
        should_close_on_overlay_click: true,
        should_close_immediately: false,
    };
    assert_eq!(*calls.lock().unwrap(), vec![expected]);
}

#[test]
fn test_caller_values_win_over_defaults() {
    let service = UiModalService::new();
    let calls = recording_show(&service);
    let content = Opaque::new("body".to_string());

    service.show(ModalOptionsPatch {
        content: Some(content.clone()),
        content_props: Some([("seriesId".to_string(), json!(12))].into()),
        should_close_on_esc: Some(false),
        is_open: Some(false),
        close_button: Some(false),
        custom_class_name: Some("wide".to_string()),
        movable: Some(true),
        container_dimensions: Some(json!("h-[80%] w-[80%]")),
        content_dimensions: Some(json!({"width": 640})),
        should_close_on_overlay_click: Some(false),
        should_close_immediately: Some(true),
        ..Default::default()
    });

    let calls = calls.lock().unwrap();
    let options = &calls[0];
    assert!(options.content.as_ref().unwrap().ptr_eq(&content));
    assert_eq!(options.content_props.as_ref().unwrap()["seriesId"], json!(12));
    assert!(!options.should_close_on_esc);
    assert!(!options.is_open);
    assert!(!options.close_button);
    assert!(options.title.is_none());
    assert_eq!(options.custom_class_name.as_deref(), Some("wide"));
    assert!(options.movable);
    assert_eq!(options.container_dimensions, Some(json!("h-[80%] w-[80%]")));
    assert_eq!(options.content_dimensions, Some(json!({"width": 640})));
    assert!(!options.should_close_on_overlay_click);
    assert!(options.should_close_immediately);
}

#[test]
fn test_default_implementation_only_warns() {
    let service = UiModalService::new();

    let (outcome, logs) = capture_logs(|| {
        let outcome = service.show(ModalOptionsPatch::new().with_title("lost"));
        service.hide();
        outcome
    });

    assert!(outcome.is_none());
    assert!(logs.contains("show() NOT IMPLEMENTED"));
    assert!(logs.contains("hide() NOT IMPLEMENTED"));
    assert!(service.get_custom_component().is_none());
}

#[test]
fn test_hide_without_host_does_not_panic() {
    let service = UiModalService::new();

    let ((), logs) = capture_logs(|| service.hide());

    assert!(logs.contains("WARN"));
    assert!(logs.contains("hide() NOT IMPLEMENTED"));
}

#[test]
fn test_installing_show_keeps_previous_hide() {
    let service = UiModalService::new();
    let hides = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&hides);
    service.set_service_implementation(ImplementationUpdate::new().hide(move || {
        counter.fetch_add(1, Ordering::SeqCst);
    }));

    let calls = recording_show(&service);
    service.show(ModalOptionsPatch::new());
    service.hide();

    assert_eq!(calls.lock().unwrap().len(), 1);
    assert_eq!(hides.load(Ordering::SeqCst), 1);
}

#[test]
fn test_installing_show_alone_leaves_default_hide() {
    let service = UiModalService::new();
    recording_show(&service);

    let ((), logs) = capture_logs(|| service.hide());

    assert!(logs.contains("hide() NOT IMPLEMENTED"));
}

#[test]
fn test_empty_update_leaves_everything_unchanged() {
    let service = UiModalService::new();
    let component = Opaque::new("Dialog");
    let calls = recording_show(&service);
    service.set_service_implementation(ImplementationUpdate::new().custom_component(component.clone()));

    service.set_service_implementation(ImplementationUpdate::new());
    service.show(ModalOptionsPatch::new());

    assert_eq!(calls.lock().unwrap().len(), 1);
    assert_eq!(service.get_custom_component(), Some(component));
}

#[test]
fn test_custom_component_is_last_installed() {
    let service = UiModalService::new();
    assert!(service.get_custom_component().is_none());

    let first = Opaque::new("First");
    let second = Opaque::new("Second");
    service.set_service_implementation(ImplementationUpdate::new().custom_component(first));
    service.set_service_implementation(ImplementationUpdate::new().custom_component(second.clone()));

    assert_eq!(service.get_custom_component(), Some(second));
}

#[test]
fn test_custom_component_passed_back_as_content_keeps_identity() {
    let service = UiModalService::new();
    let component = Opaque::new("Dialog".to_string());
    service.set_service_implementation(ImplementationUpdate::new().custom_component(component.clone()));
    let calls = recording_show(&service);

    let installed = service.get_custom_component().unwrap();
    service.show(ModalOptionsPatch::new().with_content(installed));

    let calls = calls.lock().unwrap();
    let content = calls[0].content.as_ref().unwrap();
    assert!(content.ptr_eq(&component));
    assert_eq!(content.downcast_ref::<String>().map(String::as_str), Some("Dialog"));
}

#[test]
fn test_show_returns_host_value_unchanged() {
    let service = UiModalService::new();
    let token = Opaque::new(99u32);
    let returned = token.clone();
    service.set_service_implementation(ImplementationUpdate::new().show(move |_| Some(returned.clone())));

    assert_eq!(service.show(ModalOptionsPatch::new()), Some(token));
}

#[test]
fn test_swap_is_immediate() {
    let service = UiModalService::new();
    let first = recording_show(&service);
    service.show(ModalOptionsPatch::new());

    let second = recording_show(&service);
    service.show(ModalOptionsPatch::new());
    service.show(ModalOptionsPatch::new());

    assert_eq!(first.lock().unwrap().len(), 1);
    assert_eq!(second.lock().unwrap().len(), 2);
}

#[test]
fn test_callback_may_swap_implementation() {
    let service = Arc::new(UiModalService::new());
    let hides = Arc::new(AtomicUsize::new(0));
    let inner_service = Arc::clone(&service);
    let counter = Arc::clone(&hides);

    service.set_service_implementation(ImplementationUpdate::new().show(move |_| {
        let counter = Arc::clone(&counter);
        inner_service.set_service_implementation(ImplementationUpdate::new().hide(move || {
            counter.fetch_add(1, Ordering::SeqCst);
        }));
        None
    }));

    service.show(ModalOptionsPatch::new());
    service.hide();

    assert_eq!(hides.load(Ordering::SeqCst), 1);
}

#[test]
fn test_console_host_round_trip() {
    let service = UiModalService::new();
    let host = Arc::new(ConsoleHost::new(Vec::new()));
    service.set_service_implementation(ImplementationUpdate::from_host(Arc::clone(&host)));

    let outcome = service.show(
        ModalOptionsPatch::new()
            .with_title("Download")
            .with_content("Preparing files".to_string()),
    );
    assert_eq!(
        outcome.as_ref().and_then(|o| o.downcast_ref::<ModalHandle>()),
        Some(&ModalHandle(1))
    );

    service.hide();
    assert!(host.open_modals().is_empty());

    let text = String::from_utf8(host.writer().clone()).unwrap();
    assert!(text.contains("Download"));
    assert!(text.contains("Preparing files"));
    assert!(text.contains("[modal #1 dismissed]"));
}

#[test]
fn test_show_and_hide_log_forwarding() {
    let service = UiModalService::new();
    recording_show(&service);

    let (_, logs) = capture_logs(|| service.show(ModalOptionsPatch::new().with_title("Export")));

    assert!(logs.contains("Forwarding show()"));
    assert!(!logs.contains("NOT IMPLEMENTED"));
}
