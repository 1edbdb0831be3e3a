//! Tests for view-scoped task lifetimes
//!
//! Response tasks are owned by the view that hosts the conversation, not by
//! the entry form: the first submit swaps the form out for the chat log, and
//! a task spawned in the form's scope would be cancelled with it.

use dioxus::dioxus_core::NoOpMutations;
use dioxus::prelude::*;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

static FORM_UNMOUNTED: AtomicBool = AtomicBool::new(false);
static RESPONSE_RESOLVED: AtomicBool = AtomicBool::new(false);

#[component]
fn Harness() -> Element {
    let mut submitted = use_signal(|| false);

    // Handler owned by this scope, like ChatView's submit handler. The
    // spawned task must keep running after EntryForm is swapped out.
    let on_submit = move |_: ()| {
        submitted.set(true);
        spawn(async move {
            tokio::time::sleep(Duration::from_millis(50)).await;
            RESPONSE_RESOLVED.store(true, Ordering::SeqCst);
        });
    };

    rsx! {
        if submitted() {
            div { "log" }
        } else {
            EntryForm { on_submit }
        }
    }
}

#[component]
fn EntryForm(on_submit: EventHandler<()>) -> Element {
    use_effect(move || on_submit.call(()));
    use_drop(|| FORM_UNMOUNTED.store(true, Ordering::SeqCst));
    rsx! {
        div { "form" }
    }
}

async fn drive(dom: &mut VirtualDom, budget: Duration) {
    let deadline = tokio::time::Instant::now() + budget;
    loop {
        tokio::select! {
            _ = dom.wait_for_work() => dom.render_immediate(&mut NoOpMutations),
            _ = tokio::time::sleep_until(deadline) => break,
        }
    }
}

#[tokio::test]
async fn test_response_task_outlives_swapped_form() {
    let mut dom = VirtualDom::new(Harness);
    dom.rebuild_in_place();

    drive(&mut dom, Duration::from_millis(500)).await;

    assert!(
        FORM_UNMOUNTED.load(Ordering::SeqCst),
        "submit swaps the form out"
    );
    assert!(
        RESPONSE_RESOLVED.load(Ordering::SeqCst),
        "response task keeps running after the form unmounts"
    );
}
