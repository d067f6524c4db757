// courtside-core-client
//
// Copyright: 2025, Courtside Contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::Result;
use chrono::FixedOffset;
use pretty_assertions::assert_eq;

use courtside_core_client::dtos::{Message, Reaction};
use courtside_core_client::{ContractVersion, MessageMapper};

fn mapper(contract: ContractVersion) -> MessageMapper<FixedOffset> {
    MessageMapper::new(contract).with_timezone(FixedOffset::east_opt(3600).unwrap())
}

#[test]
fn test_maps_legacy_payload_end_to_end() -> Result<()> {
    let message = mapper(ContractVersion::Legacy)
        .map_json(include_str!("fixtures/legacy_message.json"))?;

    assert_eq!(message.sender, "JD");
    assert_eq!(message.content, "Who's got tickets for Saturday?");
    assert_eq!(message.timestamp, 1700000000000);
    assert_eq!(message.time, "Tue Nov 14 2023 @ 23:13");
    assert_eq!(
        message.reactions,
        Some(vec![
            Reaction::default(),
            Reaction {
                actor: "JS".to_string(),
                reaction: "👍".to_string(),
            },
        ])
    );
    assert_eq!(
        message.photos.as_ref().map(|photos| photos[0].uri.as_str()),
        Some("messages/inbox/group_export/photos/court.jpg")
    );
    assert_eq!(
        message.share.as_ref().map(|share| share.link.as_str()),
        Some("https://example.com/box-score")
    );
    // The legacy contract predates these collections.
    assert_eq!(message.gifs, None);
    assert_eq!(message.videos, None);
    assert_eq!(message.audio, None);

    Ok(())
}

#[test]
fn test_maps_v2_payload_end_to_end() -> Result<()> {
    let message =
        mapper(ContractVersion::V2).map_json(include_str!("fixtures/v2_message.json"))?;

    assert_eq!(message.sender, "JD");
    assert_eq!(message.time, "Tue Nov 14 2023 @ 23:13");
    assert_eq!(
        message.gifs.as_ref().map(|gifs| gifs[0].uri.as_str()),
        Some("messages/inbox/group_export/gifs/dunk.gif")
    );
    assert_eq!(
        message.videos.as_ref().map(|videos| videos[0].uri.as_str()),
        Some("messages/inbox/group_export/videos/buzzer.mp4")
    );
    assert_eq!(
        message.audio.as_ref().map(|audio| audio[0].uri.as_str()),
        Some("messages/inbox/group_export/audio/huddle.aac")
    );
    assert_eq!(
        message
            .share
            .as_ref()
            .map(|share| share.share_text.as_str()),
        Some("Box score")
    );

    Ok(())
}

#[test]
fn test_reaction_list_length_matches_wire_payload() -> Result<()> {
    let mapper = mapper(ContractVersion::V2);
    let wire = mapper.parse_message(include_str!("fixtures/v2_message.json"))?;
    let wire_len = wire.reactions().map(<[_]>::len);

    let message = mapper.map_message(wire);

    assert_eq!(message.reactions.map(|reactions| reactions.len()), wire_len);
    Ok(())
}

#[test]
fn test_mapping_twice_yields_identical_output() -> Result<()> {
    let mapper = mapper(ContractVersion::V2);
    let payload = include_str!("fixtures/v2_message.json");

    let first = serde_json::to_string(&mapper.map_json(payload)?)?;
    let second = serde_json::to_string(&mapper.map_json(payload)?)?;

    assert_eq!(first, second);
    Ok(())
}

#[test]
fn test_display_shape_serializes_without_absent_collections() -> Result<()> {
    let message = mapper(ContractVersion::V2).map_json(
        r#"{ "sender": "Jane Doe", "timestamp": 1700000000000, "content": "hi" }"#,
    )?;

    let json: serde_json::Value = serde_json::from_str(&serde_json::to_string(&message)?)?;
    let object = json.as_object().expect("expected a JSON object");

    assert_eq!(object.get("sender"), Some(&"JD".into()));
    assert!(!object.contains_key("photos"));
    assert!(!object.contains_key("reactions"));
    assert!(!object.contains_key("share"));
    Ok(())
}

#[test]
fn test_wrong_contract_yields_defaults_not_errors() -> Result<()> {
    // Casing mismatches were silently tolerated by every revision of the
    // original mapper; the contract types keep that behavior.
    let message = mapper(ContractVersion::Legacy)
        .map_json(include_str!("fixtures/v2_message.json"))?;

    assert_eq!(message.sender, "");
    assert_eq!(message.timestamp, 0);
    assert_eq!(message.reactions, None);
    Ok(())
}

#[test]
fn test_malformed_payload_is_an_error() {
    assert!(mapper(ContractVersion::V2).map_json("not json").is_err());
}

#[test]
fn test_initials_match_mapper_output() -> Result<()> {
    // The sender reduction the mapper applies is the shared helper.
    let message =
        mapper(ContractVersion::V2).map_json(include_str!("fixtures/v2_message.json"))?;
    assert_eq!(Some(message.sender), courtside_utils::initials("Jane Doe"));
    Ok(())
}

#[test]
fn test_maps_minimal_message_with_null_reaction() -> Result<()> {
    let mapper = mapper(ContractVersion::V2);
    let message = mapper.map_json(
        r#"{
            "sender": "Jane Doe",
            "timestamp": 1700000000000,
            "content": "hi",
            "reactions": [null, { "actor": "John Smith", "reaction": "👍" }]
        }"#,
    )?;

    assert_eq!(
        message,
        Message {
            content: "hi".to_string(),
            sender: "JD".to_string(),
            timestamp: 1700000000000,
            time: "Tue Nov 14 2023 @ 23:13".to_string(),
            photos: None,
            gifs: None,
            videos: None,
            audio: None,
            reactions: Some(vec![
                Reaction {
                    actor: "".to_string(),
                    reaction: "".to_string(),
                },
                Reaction {
                    actor: "JS".to_string(),
                    reaction: "👍".to_string(),
                },
            ]),
            share: None,
        }
    );
    Ok(())
}
