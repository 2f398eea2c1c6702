//! Integration tests for text-track events on the broadcast bus.

use kithara_events::{Event, EventBus, TextEvent};
use tokio::sync::broadcast::error::RecvError;

#[test]
fn test_broadcast_channel() {
    let bus = EventBus::new(32);
    let mut rx = bus.subscribe();
    bus.publish(TextEvent::Disposed {
        track: "English".into(),
    });

    let event = rx.try_recv().ok();
    assert!(matches!(
        event,
        Some(Event::Text(TextEvent::Disposed { ref track })) if track == "English"
    ));
}

#[tokio::test]
async fn subscriber_task_sees_events_in_order() {
    let bus = EventBus::new(32);
    let mut rx = bus.subscribe();

    let reader = tokio::spawn(async move {
        let mut seen = Vec::new();
        loop {
            match rx.recv().await {
                Ok(Event::Text(TextEvent::Disposed { .. })) | Err(RecvError::Closed) => break,
                Ok(Event::Text(event)) => seen.push(event),
                Err(RecvError::Lagged(_)) => continue,
            }
        }
        seen
    });

    for added in 1..=3 {
        bus.publish(TextEvent::LoadedData {
            track: "English".into(),
            added,
            total: added,
        });
    }
    bus.publish(TextEvent::Disposed {
        track: "English".into(),
    });

    let seen = reader.await.unwrap();
    let added: Vec<usize> = seen
        .iter()
        .filter_map(|e| match e {
            TextEvent::LoadedData { added, .. } => Some(*added),
            _ => None,
        })
        .collect();
    assert_eq!(added, vec![1, 2, 3]);
}
