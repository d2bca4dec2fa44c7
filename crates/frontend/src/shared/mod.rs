pub mod icons;
pub mod info_tip;
pub mod settings;
pub mod storage;
