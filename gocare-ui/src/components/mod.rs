// SPDX-License-Identifier: MIT OR Apache-2.0

pub mod config_error;
pub mod connect_form;
pub mod room_view;
