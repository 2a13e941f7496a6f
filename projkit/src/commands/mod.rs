// SPDX-FileCopyrightText: © 2025 Projkit contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

pub mod datasets;
pub mod figures;
pub mod locate;
pub mod new;
pub mod results;
