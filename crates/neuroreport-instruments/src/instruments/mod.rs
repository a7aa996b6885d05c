pub mod behavioral;
pub mod eeg;
pub mod erp;
