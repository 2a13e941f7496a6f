// SPDX-FileCopyrightText: © 2025 Projkit contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

pub mod locate;
pub mod new;
