/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

/// The eight byte PNG file signature `137 80 78 71 13 10 26 10`,
/// stored as one big-endian u64 so it can be matched with a single read.
pub const PNG_SIGNATURE: u64 = 0x8950_4E47_0D0A_1A0A;
