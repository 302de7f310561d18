//! End-to-end scheduling scenarios over the service layer.

use chrono::{Duration, Utc};
use uuid::Uuid;

use meetserver::config::BookingPolicy;
use meetserver::jobs::{CompletionSweeper, ReminderScheduler};
use meetserver::meetings::status::MeetingStatus;
use meetserver::meetings::types::BookMeetingRequest;
use meetserver::shared::error::SchedulingError;
use meetserver::slots::SlotWindow;
use meetserver::tests::test_util::{harness, Harness};

fn book_request(slot_id: Uuid, title: &str) -> BookMeetingRequest {
    BookMeetingRequest {
        slot_id,
        title: title.to_string(),
        agenda: None,
        join_url: None,
        meeting_type: None,
        extra_participants: Vec::new(),
    }
}

async fn publish_slot(h: &Harness, owner: Uuid, start: chrono::DateTime<Utc>) -> Uuid {
    h.slots
        .create_slots(
            owner,
            vec![SlotWindow {
                start_time: start,
                end_time: start + Duration::minutes(30),
            }],
        )
        .await
        .unwrap()[0]
        .id
}

#[tokio::test]
async fn slot_to_completed_meeting_lifecycle() {
    let h = harness(BookingPolicy::Pending);
    let institution = Uuid::new_v4();
    let student = Uuid::new_v4();
    h.directory.add(student, "student@example.edu");
    h.directory.add(institution, "admissions@example.edu");

    // institution publishes a slot a shade under 24h out; student books
    let start = Utc::now() + Duration::hours(24) - Duration::minutes(1);
    let slot_id = publish_slot(&h, institution, start).await;
    let meeting = h
        .service
        .book_meeting(student, book_request(slot_id, "Admissions interview"))
        .await
        .unwrap();
    assert_eq!(meeting.status, MeetingStatus::Pending);
    assert!(h.slots.get_slot(slot_id).await.unwrap().is_booked);

    let confirmed = h
        .service
        .confirm_meeting(meeting.id, institution)
        .await
        .unwrap();
    assert_eq!(confirmed.status, MeetingStatus::Confirmed);

    // reminder run inside the 24h window: one email per stakeholder
    let reminders = ReminderScheduler::new(
        h.store.clone(),
        h.notifier.clone(),
        h.emails.clone(),
        h.directory.clone(),
        60,
    );
    let summary = reminders.run().await;
    assert_eq!(summary.processed, 1);
    assert_eq!(summary.succeeded, 1);
    assert_eq!(h.emails.attempts_to("student@example.edu"), 1);
    assert_eq!(h.emails.attempts_to("admissions@example.edu"), 1);
    assert!(h.store.get(meeting.id).await.unwrap().reminder_24h_sent);

    // a second run inside the same window delivers nothing more
    let summary = reminders.run().await;
    assert_eq!(summary.processed, 0);
    assert_eq!(h.emails.attempts_to("student@example.edu"), 1);

    // nothing to sweep while the meeting is still ahead
    let sweeper = CompletionSweeper::new(h.store.clone(), h.audit.clone());
    assert_eq!(sweeper.run().await.processed, 0);

    // move the meeting into the past; the next sweep completes it
    h.store
        .apply_reschedule(meeting.id, Utc::now() - Duration::hours(2))
        .await
        .unwrap();
    let summary = sweeper.run().await;
    assert_eq!(summary.succeeded, 1);
    assert_eq!(
        h.store.get(meeting.id).await.unwrap().status,
        MeetingStatus::Completed
    );
    assert_eq!(h.audit.actions_for(meeting.id).last().unwrap(), "complete");
}

#[tokio::test]
async fn simultaneous_bookings_leave_one_meeting_on_the_slot() {
    let h = harness(BookingPolicy::Pending);
    let institution = Uuid::new_v4();
    let slot_id = publish_slot(&h, institution, Utc::now() + Duration::hours(12)).await;

    let first = {
        let service = h.service.clone();
        tokio::spawn(async move {
            service
                .book_meeting(Uuid::new_v4(), book_request(slot_id, "First"))
                .await
        })
    };
    let second = {
        let service = h.service.clone();
        tokio::spawn(async move {
            service
                .book_meeting(Uuid::new_v4(), book_request(slot_id, "Second"))
                .await
        })
    };

    let results = [first.await.unwrap(), second.await.unwrap()];
    let winners: Vec<_> = results.iter().filter(|r| r.is_ok()).collect();
    assert_eq!(winners.len(), 1);
    assert!(results.iter().any(|r| matches!(
        r,
        Err(SchedulingError::SlotAlreadyBooked(_))
    )));

    let slot = h.slots.get_slot(slot_id).await.unwrap();
    assert!(slot.is_booked);
    let winning_id = winners[0].as_ref().unwrap().id;
    assert_eq!(slot.booked_by, Some(winning_id));
}

#[tokio::test]
async fn late_cancellation_reaches_everyone_despite_email_outage() {
    let h = harness(BookingPolicy::Confirmed);
    let institution = Uuid::new_v4();
    let student = Uuid::new_v4();
    h.directory.add(student, "student@example.edu");
    h.emails.fail_all();

    // confirmed meeting ten minutes from now, cancelled by the
    // institution
    let slot_id = publish_slot(&h, institution, Utc::now() + Duration::minutes(10)).await;
    let meeting = h
        .service
        .book_meeting(student, book_request(slot_id, "Final round"))
        .await
        .unwrap();
    assert_eq!(meeting.status, MeetingStatus::Confirmed);

    let cancelled = h
        .service
        .cancel_meeting(meeting.id, institution)
        .await
        .unwrap();
    assert_eq!(cancelled.status, MeetingStatus::Cancelled);

    // the slot is free again and the student heard about it, even
    // though every email bounced
    assert!(!h.slots.get_slot(slot_id).await.unwrap().is_booked);
    assert!(h
        .notifier
        .titles_for(student)
        .contains(&"Meeting cancelled".to_string()));
    assert_eq!(h.emails.attempts_to("student@example.edu"), 1);
}
