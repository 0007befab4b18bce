//! Health management: profile, conditions, care team, family, settings,
//! appointments.

use crate::handler::{Layout, MockHandler, ToolHandler};
use crate::row;

const NOT_SPECIFIED: &str = "<not specified>";

pub fn all_handlers() -> Vec<Box<dyn ToolHandler>> {
    let handlers = [
        // ── Profile ──────────────────────────────────────────────
        MockHandler::new(
            "profile.read",
            "PROFILE ➜ READ",
            Layout::Rows(&[row!("Section", ["section"], "<all>")]),
            "Loading profile data",
        ),
        MockHandler::new(
            "profile.update",
            "PROFILE ➜ UPDATE",
            Layout::AllArgs,
            "Saving profile changes",
        ),
        MockHandler::new(
            "camera.open",
            "CAMERA ➜ OPEN",
            Layout::Rows(&[row!("Source", ["source"], "<default>")]),
            "Opening camera",
        ),
        MockHandler::new(
            "profile.verifyPhone",
            "PROFILE ➜ VERIFY PHONE",
            Layout::Rows(&[row!("OTP", ["otp"], "<not provided>")]),
            "Verifying phone number",
        ),
        MockHandler::new(
            "profile.verifyEmail",
            "PROFILE ➜ VERIFY EMAIL",
            Layout::Rows(&[row!("Token", ["token"], "<not provided>")]),
            "Verifying email address",
        ),
        // ── Conditions ───────────────────────────────────────────
        MockHandler::new(
            "diagnosis.read",
            "CONDITION ➜ READ DIAGNOSIS",
            Layout::Rows(&[]),
            "Loading diagnosis records",
        ),
        MockHandler::new(
            "allergies.create",
            "ALLERGY ➜ CREATE",
            Layout::Rows(&[
                row!("Name", ["name"], NOT_SPECIFIED),
                row!("Severity", ["severity"], NOT_SPECIFIED),
                row!("Notes", ["notes"], "<none>"),
            ]),
            "Saving new allergy",
        ),
        MockHandler::new(
            "allergies.read",
            "ALLERGY ➜ READ",
            Layout::Rows(&[]),
            "Loading allergy list",
        ),
        MockHandler::new(
            "allergies.update",
            "ALLERGY ➜ UPDATE",
            Layout::AllArgs,
            "Updating allergy",
        ),
        MockHandler::new(
            "allergies.delete",
            "ALLERGY ➜ DELETE",
            Layout::Rows(&[row!("ID/Name", ["allergy_id", "name"], "<unknown>")]),
            "Removing allergy",
        ),
        // ── Care team ────────────────────────────────────────────
        MockHandler::new(
            "careTeam.read",
            "CARE TEAM ➜ READ",
            Layout::Rows(&[]),
            "Loading care team",
        ),
        // ── Family ───────────────────────────────────────────────
        MockHandler::new(
            "family.create",
            "FAMILY ➜ ADD MEMBER",
            Layout::Rows(&[
                row!("Email", ["email"], NOT_SPECIFIED),
                row!("Via", ["via"], "emailInvite"),
            ]),
            "Sending invite",
        ),
        MockHandler::new(
            "family.read",
            "FAMILY ➜ READ",
            Layout::Rows(&[]),
            "Loading family members",
        ),
        MockHandler::new(
            "family.update",
            "FAMILY ➜ UPDATE MEMBER",
            Layout::AllArgs,
            "Updating member",
        ),
        MockHandler::new(
            "family.delete",
            "FAMILY ➜ REMOVE MEMBER",
            Layout::Rows(&[row!("Member", ["member_id"], "<unknown>")]),
            "Removing family member",
        ),
        MockHandler::new(
            "family.permissionsSchema",
            "FAMILY ➜ PERMISSIONS SCHEMA",
            Layout::Rows(&[row!(
                "Available",
                "Health Schedule, Appointments, Vitals History"
            )]),
            "Listing permissions",
        ),
        // ── Settings ─────────────────────────────────────────────
        MockHandler::new(
            "wifi.read",
            "SETTINGS ➜ WIFI STATUS",
            Layout::Rows(&[]),
            "Reading WiFi settings",
        ),
        MockHandler::new(
            "brightness.update",
            "SETTINGS ➜ BRIGHTNESS",
            Layout::Rows(&[row!("Level", ["level"], NOT_SPECIFIED)]),
            "Adjusting brightness",
        ),
        MockHandler::new(
            "textSize.update",
            "SETTINGS ➜ TEXT SIZE",
            Layout::Rows(&[row!("Size", ["size"], NOT_SPECIFIED)]),
            "Adjusting text size",
        ),
        MockHandler::new(
            "device.connect",
            "SETTINGS ➜ CONNECT DEVICE",
            Layout::Rows(&[row!("Device", ["device_id"], "<scan>")]),
            "Scanning for devices",
        ),
        MockHandler::new(
            "device.read",
            "SETTINGS ➜ CONNECTED DEVICES",
            Layout::Rows(&[]),
            "Loading device list",
        ),
        MockHandler::new(
            "device.delete",
            "SETTINGS ➜ DISCONNECT DEVICE",
            Layout::Rows(&[row!("Device", ["device_id"], "<unknown>")]),
            "Disconnecting",
        ),
        MockHandler::new(
            "notification.read",
            "SETTINGS ➜ NOTIFICATIONS",
            Layout::Rows(&[]),
            "Loading notification settings",
        ),
        MockHandler::new(
            "notification.update",
            "SETTINGS ➜ UPDATE NOTIFICATION",
            Layout::Rows(&[
                row!("Setting", ["setting_name"], NOT_SPECIFIED),
                row!("Value", ["value"], NOT_SPECIFIED),
            ]),
            "Saving notification settings",
        ),
        MockHandler::new(
            "smartPrompt.update",
            "SETTINGS ➜ SMART PROMPT",
            Layout::Rows(&[row!("Enabled", ["enabled"], NOT_SPECIFIED)]),
            "Updating smart prompt",
        ),
        MockHandler::new(
            "callSettings.read",
            "SETTINGS ➜ CALL SETTINGS",
            Layout::Rows(&[]),
            "Loading call settings",
        ),
        MockHandler::new(
            "callSettings.update",
            "SETTINGS ➜ UPDATE CALL SETTINGS",
            Layout::Rows(&[
                row!("Setting", ["setting_name"], NOT_SPECIFIED),
                row!("Value", ["value"], NOT_SPECIFIED),
            ]),
            "Saving call settings",
        ),
        // ── Appointments ─────────────────────────────────────────
        MockHandler::new(
            "appointment.create",
            "APPOINTMENT ➜ CREATE",
            Layout::Rows(&[
                row!("Provider", ["provider_name"], NOT_SPECIFIED),
                row!("Patient", ["patient_name"], "<self>"),
                row!("Start", ["start_time"], NOT_SPECIFIED),
                row!("End", ["end_time"], NOT_SPECIFIED),
                row!("Location", ["location"], NOT_SPECIFIED),
                row!("Symptoms", ["symptoms"], "<none reported>"),
            ]),
            "Booking appointment",
        ),
        MockHandler::new(
            "appointment.read",
            "APPOINTMENT ➜ READ",
            Layout::Rows(&[
                row!("Timeframe", ["timeframe"], "<all>"),
                row!("Provider", ["provider_name"], "<any>"),
            ]),
            "Loading appointments",
        ),
        MockHandler::new(
            "appointment.update",
            "APPOINTMENT ➜ UPDATE",
            Layout::AllArgs,
            "Updating appointment",
        ),
        MockHandler::new(
            "appointment.delete",
            "APPOINTMENT ➜ CANCEL",
            Layout::Rows(&[row!("ID", ["target_id"], "<unknown>")]),
            "Cancelling appointment",
        ),
    ];
    handlers
        .into_iter()
        .map(|h| Box::new(h) as Box<dyn ToolHandler>)
        .collect()
}
