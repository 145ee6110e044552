//! Integration tests for reply rendering.
//!
//! The rendered texts are the daemon's public face; these tests pin the
//! exact bytes of whole exchanges, not just single lines.

use park_proto::{Reply, StatusRow, VehicleKind};

fn render(replies: &[Reply]) -> String {
    replies
        .iter()
        .map(|r| format!("{r}\n"))
        .collect::<String>()
}

#[test]
fn test_fill_and_drain_transcript() {
    let transcript = render(&[
        Reply::LotCreated { capacity: 2 },
        Reply::Allocated { slot: 1 },
        Reply::Allocated { slot: 2 },
        Reply::LotFull,
        Reply::SlotFreed { slot: 1 },
    ]);
    assert_eq!(
        transcript,
        "Created a parking lot with 2 slots\n\
         Allocated slot number: 1\n\
         Allocated slot number: 2\n\
         Sorry, parking lot is full\n\
         Slot number 1 is free\n"
    );
}

#[test]
fn test_status_block_bytes() {
    let status = Reply::Status {
        rows: vec![StatusRow {
            slot: 2,
            registration: "KA-01-HH-9999".into(),
            color: "Black".into(),
            vehicle: VehicleKind::Motor,
        }],
    };
    assert_eq!(
        format!("{status}\n"),
        "Slot\tNo.\t\tType\t\tRegistration No\tColour\n2\tKA-01-HH-9999\tMotor\tBlack\n"
    );
}

#[test]
fn test_no_match_queries_print_blank_lines() {
    let transcript = render(&[
        Reply::Registrations(Vec::new()),
        Reply::SlotNumbers(Vec::new()),
    ]);
    assert_eq!(transcript, "\n\n");
}

#[test]
fn test_error_replies_are_single_lines() {
    for reply in [
        Reply::LotFull,
        Reply::UnsupportedVehicle,
        Reply::VacantOrInvalid,
        Reply::NotFound,
        Reply::InvalidCommand,
        Reply::LotNotCreated,
        Reply::MalformedRegistration {
            registration: "BADPLATE".into(),
        },
    ] {
        let text = reply.to_string();
        assert!(!text.is_empty());
        assert!(!text.contains('\n'), "{text:?}");
    }
}

#[test]
fn test_counts_and_lookups_render_bare_numbers() {
    assert_eq!(Reply::VehicleCount { count: 0 }.to_string(), "0");
    assert_eq!(Reply::VehicleCount { count: 17 }.to_string(), "17");
    assert_eq!(Reply::SlotLocated { slot: 3 }.to_string(), "3");
}
