// ABOUTME: Keyword-matched assistant replies for ocean safety questions
// ABOUTME: First matching topic wins; one of its canned replies is picked at random
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 OceanSafe

use oceansafe_core::models::{ActivityType, Measurement};
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Optional context sent along with a question
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AssistantContext {
    /// Activity currently selected
    #[serde(default)]
    pub activity: Option<ActivityType>,
    /// Location currently selected
    #[serde(default)]
    pub location: Option<String>,
    /// Readings from the last check
    #[serde(default)]
    pub ocean_data: Option<Vec<Measurement>>,
}

/// Topic a question was matched to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Topic {
    /// General safety
    Safety,
    /// Waves and surf
    Waves,
    /// Wind and weather
    Weather,
    /// Diving
    Diving,
    /// Tides and currents
    Tides,
    /// Fishing
    Fishing,
    /// Water temperature
    Temperature,
    /// Getting started
    Beginners,
    /// Equipment
    Equipment,
}

struct TopicEntry {
    topic: Topic,
    keywords: &'static [&'static str],
    replies: &'static [&'static str],
}

const TOPICS: &[TopicEntry] = &[
    TopicEntry {
        topic: Topic::Safety,
        keywords: &["safe", "safety"],
        replies: &[
            "Safety should always be your top priority! Check current conditions, wear appropriate gear, and never go alone. Always inform someone of your plans.",
            "Ocean safety tips: Always check weather forecasts, be aware of rip currents, wear a life jacket, and know your swimming abilities.",
            "Remember the buddy system! Never venture into the ocean alone. Having a partner can be lifesaving in emergencies.",
        ],
    },
    TopicEntry {
        topic: Topic::Waves,
        keywords: &["wave", "surf"],
        replies: &[
            "Wave conditions vary throughout the day. Check the swell period and direction for the best surfing conditions. A longer period typically means more powerful waves.",
            "For surfing, look for offshore winds and a good swell. Beginners should stick to waves under 1.5 meters.",
            "Wave height is just one factor - also consider wave period, wind direction, and tides for optimal surfing conditions.",
        ],
    },
    TopicEntry {
        topic: Topic::Weather,
        keywords: &["wind", "weather"],
        replies: &[
            "Wind speed and direction significantly affect ocean activities. Offshore winds are ideal for surfing, while light winds are best for kayaking and swimming.",
            "Check the forecast for sudden weather changes. Storms can develop quickly over water. If you see dark clouds or hear thunder, get out of the water immediately.",
            "Wind creates waves and affects visibility. For diving, calm conditions with minimal wind are ideal.",
        ],
    },
    TopicEntry {
        topic: Topic::Diving,
        keywords: &["dive", "diving"],
        replies: &[
            "For diving, you need excellent visibility (over 20m), calm currents, and comfortable water temperature. Always dive with a certified buddy.",
            "Check your equipment before every dive. Ensure your air supply is full, your regulator works properly, and your dive computer is functioning.",
            "Never dive beyond your certification level. Respect depth limits and always perform a safety stop at 5 meters for 3 minutes.",
        ],
    },
    TopicEntry {
        topic: Topic::Tides,
        keywords: &["tide", "current"],
        replies: &[
            "Tides significantly affect ocean activities. High tide is often better for swimming and diving, while low tide exposes tide pools for exploration.",
            "Be aware of tidal currents, especially near inlets and jetties. These can be very strong and dangerous during tidal changes.",
            "Plan your activities around tide times. Some beaches are only accessible during low tide, while others are better at high tide.",
        ],
    },
    TopicEntry {
        topic: Topic::Fishing,
        keywords: &["fish", "fishing"],
        replies: &[
            "Fishing is often best during tide changes and early morning or late afternoon. Check local regulations for size and bag limits.",
            "Different species prefer different conditions. Research what fish are common in your area and what conditions they prefer.",
            "Always use appropriate tackle and techniques for the species you're targeting. Respect catch limits and practice sustainable fishing.",
        ],
    },
    TopicEntry {
        topic: Topic::Temperature,
        keywords: &["temperature", "cold", "warm"],
        replies: &[
            "Water temperature affects how long you can safely stay in the ocean. Below 20°C, consider wearing a wetsuit. Below 15°C, a wetsuit is essential.",
            "Hypothermia can occur even in relatively warm water if you stay in long enough. Monitor your body temperature and exit if you start shivering.",
            "Warmer water (above 25°C) is more comfortable but requires sun protection and hydration. Apply waterproof sunscreen regularly.",
        ],
    },
    TopicEntry {
        topic: Topic::Beginners,
        keywords: &["beginner", "start"],
        replies: &[
            "Starting a new ocean activity? Take lessons from certified instructors, start in calm conditions, and gradually build your skills and confidence.",
            "Every ocean activity has its learning curve. Don't rush - focus on mastering basics before advancing to challenging conditions.",
            "Join local clubs or groups for your activity. Experienced members can provide valuable guidance and safety support.",
        ],
    },
    TopicEntry {
        topic: Topic::Equipment,
        keywords: &["equipment", "gear"],
        replies: &[
            "Proper equipment is essential for safety and enjoyment. Invest in quality gear appropriate for your skill level and local conditions.",
            "Always inspect your equipment before use. Check for wear, damage, or malfunction. Replace any questionable items.",
            "Rent equipment before buying if you're new to an activity. This helps you understand what features you need.",
        ],
    },
];

const FALLBACK_REPLIES: &[&str] = &[
    "I'm here to help with ocean safety and activity planning! Ask me about specific conditions, safety tips, or activity recommendations.",
    "Based on current conditions, I can provide personalized recommendations. What specific aspect would you like to know more about?",
    "Ocean conditions change constantly. Always check the latest data before heading out and be prepared to adjust your plans.",
    "Remember: respect the ocean, know your limits, and prioritize safety above all else.",
];

/// Topic for a message, if any keyword matches
#[must_use]
pub fn match_topic(message: &str) -> Option<Topic> {
    let lower = message.to_lowercase();
    TOPICS
        .iter()
        .find(|entry| entry.keywords.iter().any(|kw| lower.contains(kw)))
        .map(|entry| entry.topic)
}

/// Replies eligible for a message
#[must_use]
pub fn candidate_replies(message: &str) -> &'static [&'static str] {
    match_topic(message)
        .and_then(|topic| TOPICS.iter().find(|entry| entry.topic == topic))
        .map_or(FALLBACK_REPLIES, |entry| entry.replies)
}

/// Pick one reply uniformly at random among the candidates
pub fn respond<R: Rng + ?Sized>(message: &str, rng: &mut R) -> &'static str {
    let replies = candidate_replies(message);
    replies.choose(rng).copied().unwrap_or(FALLBACK_REPLIES[0])
}
