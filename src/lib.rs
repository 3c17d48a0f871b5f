pub mod attack;
pub mod emu;
pub mod net;
pub mod topo;

#[cfg(test)]
mod test;
