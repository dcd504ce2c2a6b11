// educe_core/src/snapshot.rs
//
// The engine state an embedding layer reads each frame, as a defined
// binary schema: fixed repr(C) records with named fields, written into and
// read out of byte buffers through bounds-checked accessors.
use crate::{engine::Engine, npc::Npc, player::{Player, PlayerKind}};
use bytemuck::{Pod, Zeroable};
use std::{io, mem::size_of};

/// NPC slots in a snapshot; matches the per-room spawn cap.
pub const NPC_SLOTS: usize = 16;

#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct PlayerRecord {
    pub x: f32,
    pub y: f32,
    pub vx: f32,
    pub vy: f32,
    pub room_x: i32,
    pub room_y: i32,
    pub kind: i32,
    pub facing: i32,
    pub on_ground: u32,
    pub frame: u32,
}

#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct NpcRecord {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub kind: i32,
    pub frame: u32,
}

pub const PLAYER_RECORD_SIZE: usize = size_of::<PlayerRecord>();
pub const NPC_RECORD_SIZE: usize = size_of::<NpcRecord>();

/// Buffer layout: player record, NPC count, then `NPC_SLOTS` NPC records.
pub const NPC_COUNT_OFFSET: usize = PLAYER_RECORD_SIZE;
pub const NPC_TABLE_OFFSET: usize = NPC_COUNT_OFFSET + size_of::<u32>();
pub const SNAPSHOT_SIZE: usize = NPC_TABLE_OFFSET + NPC_SLOTS * NPC_RECORD_SIZE;

impl PlayerRecord {
    pub fn from_player(player: &Player) -> Self {
        Self {
            x: player.position.x,
            y: player.position.y,
            vx: player.velocity.x,
            vy: player.velocity.y,
            room_x: player.room.x,
            room_y: player.room.y,
            kind: player.kind as i32,
            facing: player.facing,
            on_ground: player.on_ground as u32,
            frame: player.current_frame,
        }
    }

    pub fn kind(&self) -> PlayerKind {
        PlayerKind::from_repr(self.kind).unwrap_or_default()
    }
}

impl NpcRecord {
    pub fn from_npc(npc: &Npc) -> Self {
        Self {
            x: npc.position.x,
            y: npc.position.y,
            width: npc.width,
            height: npc.height,
            kind: npc.kind as i32,
            frame: npc.current_frame,
        }
    }

    pub fn kind(&self) -> PlayerKind {
        PlayerKind::from_repr(self.kind).unwrap_or_default()
    }
}

fn check_window(buf_len: usize, offset: usize, size: usize) -> io::Result<()> {
    let end = offset.checked_add(size).ok_or_else(|| {
        io::Error::new(io::ErrorKind::InvalidInput, "snapshot window overflows")
    })?;
    if end > buf_len {
        return Err(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            format!("snapshot needs {end} bytes, buffer holds {buf_len}"),
        ));
    }
    Ok(())
}

fn check_slot(index: usize) -> io::Result<usize> {
    if index >= NPC_SLOTS {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("npc slot {index} out of range 0..{NPC_SLOTS}"),
        ));
    }
    Ok(NPC_TABLE_OFFSET + index * NPC_RECORD_SIZE)
}

pub fn write_player(buf: &mut [u8], record: &PlayerRecord) -> io::Result<()> {
    check_window(buf.len(), 0, PLAYER_RECORD_SIZE)?;
    buf[..PLAYER_RECORD_SIZE].copy_from_slice(bytemuck::bytes_of(record));
    Ok(())
}

pub fn read_player(buf: &[u8]) -> io::Result<PlayerRecord> {
    check_window(buf.len(), 0, PLAYER_RECORD_SIZE)?;
    Ok(bytemuck::pod_read_unaligned(&buf[..PLAYER_RECORD_SIZE]))
}

pub fn write_npc_count(buf: &mut [u8], count: u32) -> io::Result<()> {
    check_window(buf.len(), NPC_COUNT_OFFSET, size_of::<u32>())?;
    buf[NPC_COUNT_OFFSET..NPC_COUNT_OFFSET + size_of::<u32>()]
        .copy_from_slice(&count.to_le_bytes());
    Ok(())
}

pub fn read_npc_count(buf: &[u8]) -> io::Result<u32> {
    check_window(buf.len(), NPC_COUNT_OFFSET, size_of::<u32>())?;
    let mut bytes = [0u8; size_of::<u32>()];
    bytes.copy_from_slice(&buf[NPC_COUNT_OFFSET..NPC_COUNT_OFFSET + size_of::<u32>()]);
    Ok(u32::from_le_bytes(bytes))
}

pub fn write_npc(buf: &mut [u8], index: usize, record: &NpcRecord) -> io::Result<()> {
    let offset = check_slot(index)?;
    check_window(buf.len(), offset, NPC_RECORD_SIZE)?;
    buf[offset..offset + NPC_RECORD_SIZE].copy_from_slice(bytemuck::bytes_of(record));
    Ok(())
}

pub fn read_npc(buf: &[u8], index: usize) -> io::Result<NpcRecord> {
    let offset = check_slot(index)?;
    check_window(buf.len(), offset, NPC_RECORD_SIZE)?;
    Ok(bytemuck::pod_read_unaligned(&buf[offset..offset + NPC_RECORD_SIZE]))
}

/// Write the whole engine state into a snapshot buffer. NPCs beyond the
/// slot table are dropped; the count reflects what was written.
pub fn write_snapshot(buf: &mut [u8], engine: &Engine) -> io::Result<()> {
    write_player(buf, &PlayerRecord::from_player(&engine.player))?;
    let count = engine.npcs().len().min(NPC_SLOTS);
    write_npc_count(buf, count as u32)?;
    for (index, npc) in engine.npcs().iter().take(NPC_SLOTS).enumerate() {
        write_npc(buf, index, &NpcRecord::from_npc(npc))?;
    }
    Ok(())
}
