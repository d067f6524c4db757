// courtside-core-client/courtside-core-client
//
// Copyright: 2025, Courtside Contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::collections::HashMap;
use std::fmt;

use chrono::{Local, TimeZone};
use tracing::warn;

use courtside_utils::initials;

use crate::config::Configuration;
use crate::dtos;
use crate::util::TimeExt;

use super::{ContractVersion, MessageParseError, ServerMessage, WireReaction};

/// Transforms server-shaped messages into their display shape.
///
/// The derived `time` string renders the message timestamp in the mapper's
/// timezone. By default that is the local timezone of the process, so output
/// is only deterministic across machines sharing a timezone configuration;
/// tests pin a fixed offset via [`MessageMapper::with_timezone`].
///
/// Mapping is a pure, single-shot transform with no side effects beyond the
/// return value; a mapper can be shared across threads freely.
pub struct MessageMapper<Tz: TimeZone = Local> {
    contract: ContractVersion,
    timezone: Tz,
    participants: HashMap<String, String>,
}

impl MessageMapper {
    pub fn new(contract: ContractVersion) -> Self {
        Self {
            contract,
            timezone: Local,
            participants: HashMap::new(),
        }
    }

    pub fn from_config(config: &Configuration) -> Self {
        Self {
            contract: config.contract,
            timezone: Local,
            participants: config.participants.clone(),
        }
    }
}

impl<Tz: TimeZone> MessageMapper<Tz>
where
    Tz::Offset: fmt::Display,
{
    /// Replaces the timezone used when deriving the display time.
    pub fn with_timezone<T: TimeZone>(self, timezone: T) -> MessageMapper<T> {
        MessageMapper {
            contract: self.contract,
            timezone,
            participants: self.participants,
        }
    }

    /// Replaces the participant table used to resolve sender names before
    /// reducing them to initials.
    pub fn with_participants(mut self, participants: HashMap<String, String>) -> Self {
        self.participants = participants;
        self
    }

    /// Deserializes a raw payload against the active contract revision.
    pub fn parse_message(&self, payload: &str) -> Result<ServerMessage, MessageParseError> {
        ServerMessage::from_json(payload, self.contract)
    }

    /// Parses and maps in one step. This is what the front-end calls per
    /// incoming message.
    pub fn map_json(&self, payload: &str) -> Result<dtos::Message, MessageParseError> {
        Ok(self.map_message(self.parse_message(payload)?))
    }

    /// Maps one server-shaped message into its display shape.
    ///
    /// The sender and reaction actors are reduced to initials, the timestamp
    /// gains a human-readable rendering, and everything else is copied
    /// through unchanged. The output reaction list always has the same
    /// length and order as the input list.
    pub fn map_message(&self, message: ServerMessage) -> dtos::Message {
        let reactions = message.reactions().map(|reactions| {
            reactions
                .iter()
                .map(|reaction| self.map_reaction(reaction.as_ref()))
                .collect()
        });

        dtos::Message {
            content: message.content().to_string(),
            sender: self.display_name(message.sender()),
            timestamp: message.timestamp(),
            time: self.display_time(message.timestamp()),
            photos: message.photos().map(<[_]>::to_vec),
            gifs: message.gifs().map(<[_]>::to_vec),
            videos: message.videos().map(<[_]>::to_vec),
            audio: message.audio().map(<[_]>::to_vec),
            reactions,
            share: message.share().cloned(),
        }
    }

    fn map_reaction(&self, reaction: Option<&WireReaction>) -> dtos::Reaction {
        // A null entry keeps its slot so reaction counts stay aligned.
        let Some(reaction) = reaction else {
            return dtos::Reaction::default();
        };

        dtos::Reaction {
            actor: self.display_name(&reaction.actor),
            reaction: reaction.reaction.clone(),
        }
    }

    fn display_name(&self, name: &str) -> String {
        let name = self
            .participants
            .get(name)
            .map(String::as_str)
            .unwrap_or(name);
        initials(name).unwrap_or_else(|| name.to_string())
    }

    fn display_time(&self, timestamp: i64) -> String {
        let Some(datetime) = self.timezone.timestamp_millis_opt(timestamp).single() else {
            warn!(timestamp, "Message timestamp is outside the representable range");
            return String::new();
        };
        datetime.display_time()
    }
}
