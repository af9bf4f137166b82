mod common;
mod conditions;
mod navigation;
