// ABOUTME: Fixed user-facing text for readings, scores, activities and tips
// ABOUTME: Wording is kept stable so stored history and exports stay comparable
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 OceanSafe

// Temperature
/// Status label and recommendation
pub const TEMPERATURE_COLD: (&str, &str) = ("Cold", "Wetsuit recommended for extended activities");
/// Status label and recommendation
pub const TEMPERATURE_WARM: (&str, &str) = ("Warm", "Stay hydrated and use sun protection");
/// Status label and recommendation
pub const TEMPERATURE_COMFORTABLE: (&str, &str) =
    ("Comfortable", "Ideal temperature for water activities");

// Wind
/// Status label and recommendation
pub const WIND_LIGHT: (&str, &str) = ("Light", "Excellent conditions for all activities");
/// Status label and recommendation
pub const WIND_MODERATE: (&str, &str) = ("Moderate", "Manageable with proper equipment");
/// Status label and recommendation
pub const WIND_STRONG: (&str, &str) = ("Strong", "Windy conditions, stay alert");

// Visibility
/// Status label and recommendation
pub const VISIBILITY_EXCELLENT: (&str, &str) = (
    "Excellent",
    "Perfect visibility for diving and underwater activities",
);
/// Status label and recommendation
pub const VISIBILITY_GOOD: (&str, &str) = ("Good", "Good for most activities");
/// Status label and recommendation
pub const VISIBILITY_POOR: (&str, &str) = ("Poor", "Limited visibility, stay cautious");

// Currents
/// Status label and recommendation
pub const CURRENTS_CALM: (&str, &str) = ("Calm", "Safe for all water activities");
/// Status label and recommendation
pub const CURRENTS_MODERATE: (&str, &str) = (
    "Moderate",
    "Exercise caution, suitable for experienced users",
);
/// Status label and recommendation
pub const CURRENTS_STRONG: (&str, &str) = ("Strong", "Strong currents present, only for experts");

// Waves
/// Status label and recommendation
pub const WAVES_SMALL: (&str, &str) = ("Small", "Calm conditions, perfect for beginners");
/// Status label and recommendation
pub const WAVES_MODERATE: (&str, &str) = ("Moderate", "Good for intermediate activities");
/// Status label and recommendation
pub const WAVES_LARGE: (&str, &str) = ("Large", "Challenging conditions, advanced skills required");

// Safety index
/// Status label and recommendation
pub const SAFETY_SAFE: (&str, &str) = ("Safe", "Conditions are favorable for ocean activities");
/// Status label and recommendation
pub const SAFETY_MODERATE: (&str, &str) =
    ("Moderate", "Check specific conditions before proceeding");
/// Status label and recommendation
pub const SAFETY_CAUTION: (&str, &str) =
    ("Caution", "Consider postponing non-essential activities");

/// Prefix of the excellent overall sentence; the activity name follows
pub const OVERALL_EXCELLENT_PREFIX: &str = "Excellent conditions for";
/// Overall sentence for a good score
pub const OVERALL_GOOD: &str = "Good conditions with minor concerns";
/// Overall sentence for everything else
pub const OVERALL_CHALLENGING: &str = "Challenging conditions, proceed with caution";

/// Factors that matter most for the activity
pub const DETAILS_SURFING: &str = "Large waves recommended, moderate currents acceptable";
/// Factors that matter most for the activity
pub const DETAILS_FISHING: &str = "Calm conditions preferred, good visibility helps";
/// Factors that matter most for the activity
pub const DETAILS_DIVING: &str = "Excellent visibility crucial, calm currents essential";
/// Factors that matter most for the activity
pub const DETAILS_SAILING: &str = "Moderate wind ideal, manageable waves";
/// Factors that matter most for the activity
pub const DETAILS_KAYAKING: &str = "Calm conditions preferred, low wind speeds";
/// Factors that matter most for the activity
pub const DETAILS_SWIMMING: &str = "Comfortable temperature, calm conditions essential";

/// Generic safety tips attached to every result
pub const SAFETY_TIPS: [&str; 5] = [
    "Always check local weather updates before heading out",
    "Wear appropriate safety gear and equipment",
    "Never go alone - use the buddy system",
    "Know your limits and skill level",
    "Have emergency contact information readily available",
];

/// First assistant message in a new transcript
pub const ASSISTANT_GREETING: &str = "Hello! I'm your Ocean Safety AI Assistant. Ask me anything about ocean conditions, safety tips, or activity recommendations.";

/// Suffix of the breeding-season alert message; the species name precedes it
pub const BREEDING_ALERT_SUFFIX: &str =
    "is currently in breeding season. Please avoid fishing this species to help preserve population.";

/// Validation: blank full name
pub const INVALID_FULL_NAME: &str = "Please enter your full name";
/// Validation: malformed email
pub const INVALID_EMAIL: &str = "Please enter a valid email address";
/// Validation: short password
pub const PASSWORD_TOO_SHORT: &str = "Password must be at least 6 characters";
/// Login failure
pub const INVALID_CREDENTIALS: &str = "Invalid email or password";
/// Assistant request without text
pub const MESSAGE_REQUIRED: &str = "Message is required";
