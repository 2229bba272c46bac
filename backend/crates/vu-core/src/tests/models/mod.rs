mod discord_id;
mod discord_user;
mod minecraft_uuid;
mod permission;
mod texture_payload;
