use super::{Memory, MemoryMap};

const RUN: &[u8] = b"RUN\r";

pub fn queue_run<M: Memory + ?Sized>(memory: &mut M) {
    queue_run_with(memory, &MemoryMap::default())
}

/// Types `RUN` and return into the KERNAL keyboard queue.
pub fn queue_run_with<M: Memory + ?Sized>(memory: &mut M, map: &MemoryMap) {
    for (offset, byte) in RUN.iter().enumerate() {
        memory.write(map.keyboard_buffer + offset as u16, *byte);
    }
    memory.write(map.keyboard_count, RUN.len() as u8);
}
