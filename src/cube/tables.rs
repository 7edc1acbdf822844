//! Facelet permutation tables for the cube variants.
//!
//! Each action lists the facelets it touches as two parallel rows, so that
//! `new[DEST[a][k]] = old[SOURCE[a][k]]`. Facelets are laid out face-major in the order U, D, L,
//! R, B, F with `face * n * n + row * n + col`.

/// Sources for the 12 face turns of a 2x2x2.
pub(crate) const CUBE2_SOURCE: [&[u8]; 12] = [
    // U'
    &[1, 3, 0, 2, 17, 19, 21, 23, 13, 15, 9, 11],
    // U
    &[2, 0, 3, 1, 21, 23, 17, 19, 9, 11, 13, 15],
    // D'
    &[5, 7, 4, 6, 20, 22, 16, 18, 8, 10, 12, 14],
    // D
    &[6, 4, 7, 5, 16, 18, 20, 22, 12, 14, 8, 10],
    // L'
    &[20, 21, 19, 18, 9, 11, 8, 10, 1, 0, 4, 5],
    // L
    &[19, 18, 20, 21, 10, 8, 11, 9, 5, 4, 0, 1],
    // R'
    &[17, 16, 22, 23, 13, 15, 12, 14, 7, 6, 2, 3],
    // R
    &[22, 23, 17, 16, 14, 12, 15, 13, 3, 2, 6, 7],
    // B'
    &[8, 9, 14, 15, 6, 4, 3, 1, 17, 19, 16, 18],
    // B
    &[15, 14, 9, 8, 1, 3, 4, 6, 18, 16, 19, 17],
    // F'
    &[13, 12, 11, 10, 0, 2, 5, 7, 21, 23, 20, 22],
    // F
    &[10, 11, 12, 13, 7, 5, 2, 0, 22, 20, 23, 21],
];

/// Destinations for the 12 face turns of a 2x2x2.
pub(crate) const CUBE2_DEST: [&[u8]; 12] = [
    // U'
    &[0, 1, 2, 3, 9, 11, 13, 15, 17, 19, 21, 23],
    // U
    &[0, 1, 2, 3, 9, 11, 13, 15, 17, 19, 21, 23],
    // D'
    &[4, 5, 6, 7, 8, 10, 12, 14, 16, 18, 20, 22],
    // D
    &[4, 5, 6, 7, 8, 10, 12, 14, 16, 18, 20, 22],
    // L'
    &[0, 1, 4, 5, 8, 9, 10, 11, 18, 19, 20, 21],
    // L
    &[0, 1, 4, 5, 8, 9, 10, 11, 18, 19, 20, 21],
    // R'
    &[2, 3, 6, 7, 12, 13, 14, 15, 16, 17, 22, 23],
    // R
    &[2, 3, 6, 7, 12, 13, 14, 15, 16, 17, 22, 23],
    // B'
    &[1, 3, 4, 6, 8, 9, 14, 15, 16, 17, 18, 19],
    // B
    &[1, 3, 4, 6, 8, 9, 14, 15, 16, 17, 18, 19],
    // F'
    &[0, 2, 5, 7, 10, 11, 12, 13, 20, 21, 22, 23],
    // F
    &[0, 2, 5, 7, 10, 11, 12, 13, 20, 21, 22, 23],
];

/// Facelets of each face of a 2x2x2.
pub(crate) const CUBE2_FACES: [&[u8]; 6] = [
    &[0, 1, 2, 3],
    &[4, 5, 6, 7],
    &[8, 9, 10, 11],
    &[12, 13, 14, 15],
    &[16, 17, 18, 19],
    &[20, 21, 22, 23],
];

/// Sources for the 12 face turns of a 3x3x3.
pub(crate) const CUBE3_SOURCE: [&[u8]; 12] = [
    // U'
    &[2, 5, 8, 1, 7, 0, 3, 6, 38, 41, 44, 47, 50, 53, 29, 32, 35, 20, 23, 26],
    // U
    &[6, 3, 0, 7, 1, 8, 5, 2, 47, 50, 53, 38, 41, 44, 20, 23, 26, 29, 32, 35],
    // D'
    &[11, 14, 17, 10, 16, 9, 12, 15, 45, 48, 51, 36, 39, 42, 18, 21, 24, 27, 30, 33],
    // D
    &[15, 12, 9, 16, 10, 17, 14, 11, 36, 39, 42, 45, 48, 51, 27, 30, 33, 18, 21, 24],
    // L'
    &[45, 46, 47, 44, 43, 42, 20, 23, 26, 19, 25, 18, 21, 24, 2, 1, 0, 9, 10, 11],
    // L
    &[44, 43, 42, 45, 46, 47, 24, 21, 18, 25, 19, 26, 23, 20, 11, 10, 9, 0, 1, 2],
    // R'
    &[38, 37, 36, 51, 52, 53, 29, 32, 35, 28, 34, 27, 30, 33, 17, 16, 15, 6, 7, 8],
    // R
    &[51, 52, 53, 38, 37, 36, 33, 30, 27, 34, 28, 35, 32, 29, 8, 7, 6, 15, 16, 17],
    // B'
    &[18, 19, 20, 33, 34, 35, 15, 12, 9, 8, 5, 2, 38, 41, 44, 37, 43, 36, 39, 42],
    // B
    &[35, 34, 33, 20, 19, 18, 2, 5, 8, 9, 12, 15, 42, 39, 36, 43, 37, 44, 41, 38],
    // F'
    &[29, 28, 27, 26, 25, 24, 0, 3, 6, 11, 14, 17, 47, 50, 53, 46, 52, 45, 48, 51],
    // F
    &[24, 25, 26, 27, 28, 29, 17, 14, 11, 6, 3, 0, 51, 48, 45, 52, 46, 53, 50, 47],
];

/// Destinations for the 12 face turns of a 3x3x3.
pub(crate) const CUBE3_DEST: [&[u8]; 12] = [
    // U'
    &[0, 1, 2, 3, 5, 6, 7, 8, 20, 23, 26, 29, 32, 35, 38, 41, 44, 47, 50, 53],
    // U
    &[0, 1, 2, 3, 5, 6, 7, 8, 20, 23, 26, 29, 32, 35, 38, 41, 44, 47, 50, 53],
    // D'
    &[9, 10, 11, 12, 14, 15, 16, 17, 18, 21, 24, 27, 30, 33, 36, 39, 42, 45, 48, 51],
    // D
    &[9, 10, 11, 12, 14, 15, 16, 17, 18, 21, 24, 27, 30, 33, 36, 39, 42, 45, 48, 51],
    // L'
    &[0, 1, 2, 9, 10, 11, 18, 19, 20, 21, 23, 24, 25, 26, 42, 43, 44, 45, 46, 47],
    // L
    &[0, 1, 2, 9, 10, 11, 18, 19, 20, 21, 23, 24, 25, 26, 42, 43, 44, 45, 46, 47],
    // R'
    &[6, 7, 8, 15, 16, 17, 27, 28, 29, 30, 32, 33, 34, 35, 36, 37, 38, 51, 52, 53],
    // R
    &[6, 7, 8, 15, 16, 17, 27, 28, 29, 30, 32, 33, 34, 35, 36, 37, 38, 51, 52, 53],
    // B'
    &[2, 5, 8, 9, 12, 15, 18, 19, 20, 33, 34, 35, 36, 37, 38, 39, 41, 42, 43, 44],
    // B
    &[2, 5, 8, 9, 12, 15, 18, 19, 20, 33, 34, 35, 36, 37, 38, 39, 41, 42, 43, 44],
    // F'
    &[0, 3, 6, 11, 14, 17, 24, 25, 26, 27, 28, 29, 45, 46, 47, 48, 50, 51, 52, 53],
    // F
    &[0, 3, 6, 11, 14, 17, 24, 25, 26, 27, 28, 29, 45, 46, 47, 48, 50, 51, 52, 53],
];

/// Sources for the 24 turns of a 4x4x4. Lowercase entries are the inner layer next to that face.
pub(crate) const CUBE4_SOURCE: [&[u8]; 24] = [
    // U'
    &[3, 7, 11, 15, 2, 6, 10, 14, 1, 5, 9, 13, 0, 4, 8, 12, 67, 71, 75, 79, 83, 87, 91, 95, 51, 55, 59, 63, 35, 39, 43, 47],
    // U
    &[12, 8, 4, 0, 13, 9, 5, 1, 14, 10, 6, 2, 15, 11, 7, 3, 83, 87, 91, 95, 67, 71, 75, 79, 35, 39, 43, 47, 51, 55, 59, 63],
    // D'
    &[19, 23, 27, 31, 18, 22, 26, 30, 17, 21, 25, 29, 16, 20, 24, 28, 80, 84, 88, 92, 64, 68, 72, 76, 32, 36, 40, 44, 48, 52, 56, 60],
    // D
    &[28, 24, 20, 16, 29, 25, 21, 17, 30, 26, 22, 18, 31, 27, 23, 19, 64, 68, 72, 76, 80, 84, 88, 92, 48, 52, 56, 60, 32, 36, 40, 44],
    // L'
    &[80, 81, 82, 83, 79, 78, 77, 76, 35, 39, 43, 47, 34, 38, 42, 46, 33, 37, 41, 45, 32, 36, 40, 44, 3, 2, 1, 0, 16, 17, 18, 19],
    // L
    &[79, 78, 77, 76, 80, 81, 82, 83, 44, 40, 36, 32, 45, 41, 37, 33, 46, 42, 38, 34, 47, 43, 39, 35, 19, 18, 17, 16, 0, 1, 2, 3],
    // R'
    &[67, 66, 65, 64, 92, 93, 94, 95, 51, 55, 59, 63, 50, 54, 58, 62, 49, 53, 57, 61, 48, 52, 56, 60, 31, 30, 29, 28, 12, 13, 14, 15],
    // R
    &[92, 93, 94, 95, 67, 66, 65, 64, 60, 56, 52, 48, 61, 57, 53, 49, 62, 58, 54, 50, 63, 59, 55, 51, 15, 14, 13, 12, 28, 29, 30, 31],
    // B'
    &[32, 33, 34, 35, 60, 61, 62, 63, 28, 24, 20, 16, 15, 11, 7, 3, 67, 71, 75, 79, 66, 70, 74, 78, 65, 69, 73, 77, 64, 68, 72, 76],
    // B
    &[63, 62, 61, 60, 35, 34, 33, 32, 3, 7, 11, 15, 16, 20, 24, 28, 76, 72, 68, 64, 77, 73, 69, 65, 78, 74, 70, 66, 79, 75, 71, 67],
    // F'
    &[51, 50, 49, 48, 47, 46, 45, 44, 0, 4, 8, 12, 19, 23, 27, 31, 83, 87, 91, 95, 82, 86, 90, 94, 81, 85, 89, 93, 80, 84, 88, 92],
    // F
    &[44, 45, 46, 47, 48, 49, 50, 51, 31, 27, 23, 19, 12, 8, 4, 0, 92, 88, 84, 80, 93, 89, 85, 81, 94, 90, 86, 82, 95, 91, 87, 83],
    // u'
    &[66, 70, 74, 78, 82, 86, 90, 94, 50, 54, 58, 62, 34, 38, 42, 46],
    // u
    &[82, 86, 90, 94, 66, 70, 74, 78, 34, 38, 42, 46, 50, 54, 58, 62],
    // d'
    &[81, 85, 89, 93, 65, 69, 73, 77, 33, 37, 41, 45, 49, 53, 57, 61],
    // d
    &[65, 69, 73, 77, 81, 85, 89, 93, 49, 53, 57, 61, 33, 37, 41, 45],
    // l'
    &[84, 85, 86, 87, 75, 74, 73, 72, 7, 6, 5, 4, 20, 21, 22, 23],
    // l
    &[75, 74, 73, 72, 84, 85, 86, 87, 23, 22, 21, 20, 4, 5, 6, 7],
    // r'
    &[71, 70, 69, 68, 88, 89, 90, 91, 27, 26, 25, 24, 8, 9, 10, 11],
    // r
    &[88, 89, 90, 91, 71, 70, 69, 68, 11, 10, 9, 8, 24, 25, 26, 27],
    // b'
    &[36, 37, 38, 39, 56, 57, 58, 59, 29, 25, 21, 17, 14, 10, 6, 2],
    // b
    &[59, 58, 57, 56, 39, 38, 37, 36, 2, 6, 10, 14, 17, 21, 25, 29],
    // f'
    &[55, 54, 53, 52, 43, 42, 41, 40, 1, 5, 9, 13, 18, 22, 26, 30],
    // f
    &[40, 41, 42, 43, 52, 53, 54, 55, 30, 26, 22, 18, 13, 9, 5, 1],
];

/// Destinations for the 24 turns of a 4x4x4.
pub(crate) const CUBE4_DEST: [&[u8]; 24] = [
    // U'
    &[0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 35, 39, 43, 47, 51, 55, 59, 63, 67, 71, 75, 79, 83, 87, 91, 95],
    // U
    &[0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 35, 39, 43, 47, 51, 55, 59, 63, 67, 71, 75, 79, 83, 87, 91, 95],
    // D'
    &[16, 17, 18, 19, 20, 21, 22, 23, 24, 25, 26, 27, 28, 29, 30, 31, 32, 36, 40, 44, 48, 52, 56, 60, 64, 68, 72, 76, 80, 84, 88, 92],
    // D
    &[16, 17, 18, 19, 20, 21, 22, 23, 24, 25, 26, 27, 28, 29, 30, 31, 32, 36, 40, 44, 48, 52, 56, 60, 64, 68, 72, 76, 80, 84, 88, 92],
    // L'
    &[0, 1, 2, 3, 16, 17, 18, 19, 32, 33, 34, 35, 36, 37, 38, 39, 40, 41, 42, 43, 44, 45, 46, 47, 76, 77, 78, 79, 80, 81, 82, 83],
    // L
    &[0, 1, 2, 3, 16, 17, 18, 19, 32, 33, 34, 35, 36, 37, 38, 39, 40, 41, 42, 43, 44, 45, 46, 47, 76, 77, 78, 79, 80, 81, 82, 83],
    // R'
    &[12, 13, 14, 15, 28, 29, 30, 31, 48, 49, 50, 51, 52, 53, 54, 55, 56, 57, 58, 59, 60, 61, 62, 63, 64, 65, 66, 67, 92, 93, 94, 95],
    // R
    &[12, 13, 14, 15, 28, 29, 30, 31, 48, 49, 50, 51, 52, 53, 54, 55, 56, 57, 58, 59, 60, 61, 62, 63, 64, 65, 66, 67, 92, 93, 94, 95],
    // B'
    &[3, 7, 11, 15, 16, 20, 24, 28, 32, 33, 34, 35, 60, 61, 62, 63, 64, 65, 66, 67, 68, 69, 70, 71, 72, 73, 74, 75, 76, 77, 78, 79],
    // B
    &[3, 7, 11, 15, 16, 20, 24, 28, 32, 33, 34, 35, 60, 61, 62, 63, 64, 65, 66, 67, 68, 69, 70, 71, 72, 73, 74, 75, 76, 77, 78, 79],
    // F'
    &[0, 4, 8, 12, 19, 23, 27, 31, 44, 45, 46, 47, 48, 49, 50, 51, 80, 81, 82, 83, 84, 85, 86, 87, 88, 89, 90, 91, 92, 93, 94, 95],
    // F
    &[0, 4, 8, 12, 19, 23, 27, 31, 44, 45, 46, 47, 48, 49, 50, 51, 80, 81, 82, 83, 84, 85, 86, 87, 88, 89, 90, 91, 92, 93, 94, 95],
    // u'
    &[34, 38, 42, 46, 50, 54, 58, 62, 66, 70, 74, 78, 82, 86, 90, 94],
    // u
    &[34, 38, 42, 46, 50, 54, 58, 62, 66, 70, 74, 78, 82, 86, 90, 94],
    // d'
    &[33, 37, 41, 45, 49, 53, 57, 61, 65, 69, 73, 77, 81, 85, 89, 93],
    // d
    &[33, 37, 41, 45, 49, 53, 57, 61, 65, 69, 73, 77, 81, 85, 89, 93],
    // l'
    &[4, 5, 6, 7, 20, 21, 22, 23, 72, 73, 74, 75, 84, 85, 86, 87],
    // l
    &[4, 5, 6, 7, 20, 21, 22, 23, 72, 73, 74, 75, 84, 85, 86, 87],
    // r'
    &[8, 9, 10, 11, 24, 25, 26, 27, 68, 69, 70, 71, 88, 89, 90, 91],
    // r
    &[8, 9, 10, 11, 24, 25, 26, 27, 68, 69, 70, 71, 88, 89, 90, 91],
    // b'
    &[2, 6, 10, 14, 17, 21, 25, 29, 36, 37, 38, 39, 56, 57, 58, 59],
    // b
    &[2, 6, 10, 14, 17, 21, 25, 29, 36, 37, 38, 39, 56, 57, 58, 59],
    // f'
    &[1, 5, 9, 13, 18, 22, 26, 30, 40, 41, 42, 43, 52, 53, 54, 55],
    // f
    &[1, 5, 9, 13, 18, 22, 26, 30, 40, 41, 42, 43, 52, 53, 54, 55],
];

/// Facelets of each face of a 3x3x3.
pub(crate) const CUBE3_FACES: [&[u8]; 6] = [
    &[0, 1, 2, 3, 4, 5, 6, 7, 8],
    &[9, 10, 11, 12, 13, 14, 15, 16, 17],
    &[18, 19, 20, 21, 22, 23, 24, 25, 26],
    &[27, 28, 29, 30, 31, 32, 33, 34, 35],
    &[36, 37, 38, 39, 40, 41, 42, 43, 44],
    &[45, 46, 47, 48, 49, 50, 51, 52, 53],
];

/// Corner facelets of each face of a 3x3x3.
pub(crate) const CUBE3_CORNER_FACES: [&[u8]; 6] = [
    &[0, 2, 6, 8],
    &[9, 11, 15, 17],
    &[18, 20, 24, 26],
    &[27, 29, 33, 35],
    &[36, 38, 42, 44],
    &[45, 47, 51, 53],
];

/// Facelets of each face of a 4x4x4.
pub(crate) const CUBE4_FACES: [&[u8]; 6] = [
    &[0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15],
    &[16, 17, 18, 19, 20, 21, 22, 23, 24, 25, 26, 27, 28, 29, 30, 31],
    &[32, 33, 34, 35, 36, 37, 38, 39, 40, 41, 42, 43, 44, 45, 46, 47],
    &[48, 49, 50, 51, 52, 53, 54, 55, 56, 57, 58, 59, 60, 61, 62, 63],
    &[64, 65, 66, 67, 68, 69, 70, 71, 72, 73, 74, 75, 76, 77, 78, 79],
    &[80, 81, 82, 83, 84, 85, 86, 87, 88, 89, 90, 91, 92, 93, 94, 95],
];
