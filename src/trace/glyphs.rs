// Waypoints are in the unit square with y pointing down. Uppercase letters and digits
// sit between y = 0.15 and y = 0.85; lowercase letters use an x-height of 0.45 with
// ascenders at 0.15 and descenders reaching 0.95.

pub(super) type Glyph = (&'static str, &'static [[f32; 2]]);

pub(super) const UPPERCASE: &[Glyph] = &[
	("A", &[[0.2, 0.85], [0.35, 0.5], [0.5, 0.15], [0.65, 0.5], [0.8, 0.85], [0.5, 0.62]]),
	("B", &[[0.25, 0.15], [0.25, 0.5], [0.25, 0.85], [0.65, 0.25], [0.45, 0.5], [0.7, 0.7], [0.45, 0.85]]),
	("C", &[[0.75, 0.25], [0.5, 0.15], [0.25, 0.4], [0.25, 0.6], [0.5, 0.85], [0.75, 0.75]]),
	("D", &[[0.25, 0.15], [0.25, 0.5], [0.25, 0.85], [0.6, 0.2], [0.78, 0.5], [0.6, 0.8]]),
	("E", &[[0.75, 0.15], [0.25, 0.15], [0.25, 0.5], [0.65, 0.5], [0.25, 0.85], [0.75, 0.85]]),
	("F", &[[0.75, 0.15], [0.25, 0.15], [0.25, 0.5], [0.65, 0.5], [0.25, 0.85]]),
	("G", &[[0.75, 0.25], [0.5, 0.15], [0.25, 0.5], [0.5, 0.85], [0.75, 0.7], [0.55, 0.55]]),
	("H", &[[0.25, 0.15], [0.25, 0.85], [0.25, 0.5], [0.75, 0.5], [0.75, 0.15], [0.75, 0.85]]),
	("I", &[[0.5, 0.15], [0.5, 0.5], [0.5, 0.85]]),
	("J", &[[0.65, 0.15], [0.65, 0.55], [0.55, 0.82], [0.3, 0.7]]),
	("K", &[[0.25, 0.15], [0.25, 0.85], [0.75, 0.15], [0.3, 0.55], [0.75, 0.85]]),
	("L", &[[0.25, 0.15], [0.25, 0.85], [0.75, 0.85]]),
	("M", &[[0.2, 0.85], [0.2, 0.15], [0.5, 0.55], [0.8, 0.15], [0.8, 0.85]]),
	("N", &[[0.25, 0.85], [0.25, 0.15], [0.5, 0.5], [0.75, 0.85], [0.75, 0.15]]),
	("O", &[[0.5, 0.15], [0.25, 0.3], [0.25, 0.7], [0.5, 0.85], [0.75, 0.7], [0.75, 0.3]]),
	("P", &[[0.25, 0.85], [0.25, 0.5], [0.25, 0.15], [0.6, 0.18], [0.72, 0.35], [0.5, 0.5]]),
	("Q", &[[0.5, 0.15], [0.25, 0.35], [0.25, 0.65], [0.5, 0.82], [0.75, 0.65], [0.75, 0.35], [0.8, 0.9]]),
	("R", &[[0.25, 0.85], [0.25, 0.15], [0.65, 0.22], [0.5, 0.5], [0.25, 0.5], [0.75, 0.85]]),
	("S", &[[0.75, 0.25], [0.5, 0.15], [0.27, 0.3], [0.5, 0.5], [0.73, 0.7], [0.5, 0.85], [0.25, 0.75]]),
	("T", &[[0.2, 0.15], [0.5, 0.15], [0.8, 0.15], [0.5, 0.5], [0.5, 0.85]]),
	("U", &[[0.25, 0.15], [0.25, 0.6], [0.5, 0.85], [0.75, 0.6], [0.75, 0.15]]),
	("V", &[[0.2, 0.15], [0.35, 0.5], [0.5, 0.85], [0.65, 0.5], [0.8, 0.15]]),
	("W", &[[0.15, 0.15], [0.3, 0.85], [0.5, 0.4], [0.7, 0.85], [0.85, 0.15]]),
	("X", &[[0.25, 0.15], [0.5, 0.5], [0.75, 0.85], [0.75, 0.15], [0.25, 0.85]]),
	("Y", &[[0.25, 0.15], [0.5, 0.5], [0.75, 0.15], [0.5, 0.85]]),
	("Z", &[[0.25, 0.15], [0.75, 0.15], [0.5, 0.5], [0.25, 0.85], [0.75, 0.85]]),
];

pub(super) const LOWERCASE: &[Glyph] = &[
	("a", &[[0.7, 0.5], [0.45, 0.45], [0.3, 0.65], [0.45, 0.85], [0.7, 0.68], [0.72, 0.88]]),
	("b", &[[0.3, 0.15], [0.3, 0.5], [0.3, 0.85], [0.55, 0.5], [0.72, 0.67], [0.55, 0.85]]),
	("c", &[[0.7, 0.5], [0.5, 0.45], [0.3, 0.65], [0.5, 0.85], [0.7, 0.8]]),
	("d", &[[0.7, 0.15], [0.7, 0.5], [0.7, 0.85], [0.45, 0.5], [0.28, 0.67], [0.45, 0.85]]),
	("e", &[[0.3, 0.65], [0.7, 0.62], [0.5, 0.45], [0.5, 0.85], [0.7, 0.8]]),
	("f", &[[0.65, 0.18], [0.45, 0.2], [0.45, 0.5], [0.45, 0.85], [0.25, 0.42], [0.65, 0.42]]),
	("g", &[[0.68, 0.45], [0.45, 0.45], [0.3, 0.6], [0.5, 0.72], [0.7, 0.6], [0.68, 0.88], [0.4, 0.95]]),
	("h", &[[0.3, 0.15], [0.3, 0.5], [0.3, 0.85], [0.55, 0.48], [0.7, 0.62], [0.7, 0.85]]),
	("i", &[[0.5, 0.2], [0.5, 0.45], [0.5, 0.85]]),
	("j", &[[0.55, 0.2], [0.55, 0.45], [0.55, 0.8], [0.35, 0.92]]),
	("k", &[[0.3, 0.15], [0.3, 0.85], [0.68, 0.45], [0.34, 0.65], [0.7, 0.85]]),
	("l", &[[0.5, 0.15], [0.5, 0.5], [0.5, 0.85]]),
	("m", &[[0.2, 0.85], [0.2, 0.45], [0.38, 0.47], [0.5, 0.7], [0.62, 0.47], [0.8, 0.6], [0.8, 0.85]]),
	("n", &[[0.3, 0.85], [0.3, 0.45], [0.55, 0.45], [0.7, 0.6], [0.7, 0.85]]),
	("o", &[[0.5, 0.4], [0.69, 0.51], [0.69, 0.73], [0.5, 0.84], [0.31, 0.73], [0.31, 0.51]]),
	("p", &[[0.3, 0.45], [0.3, 0.7], [0.3, 0.95], [0.55, 0.42], [0.72, 0.58], [0.5, 0.72]]),
	("q", &[[0.7, 0.45], [0.7, 0.7], [0.7, 0.95], [0.45, 0.42], [0.28, 0.58], [0.5, 0.72]]),
	("r", &[[0.35, 0.85], [0.35, 0.6], [0.52, 0.45], [0.7, 0.48]]),
	("s", &[[0.68, 0.48], [0.45, 0.44], [0.32, 0.55], [0.5, 0.65], [0.68, 0.75], [0.5, 0.86], [0.3, 0.8]]),
	("t", &[[0.45, 0.2], [0.45, 0.55], [0.5, 0.85], [0.28, 0.4], [0.65, 0.4]]),
	("u", &[[0.3, 0.45], [0.3, 0.7], [0.48, 0.85], [0.7, 0.68], [0.7, 0.45], [0.72, 0.88]]),
	("v", &[[0.25, 0.45], [0.38, 0.65], [0.5, 0.85], [0.62, 0.65], [0.75, 0.45]]),
	("w", &[[0.15, 0.45], [0.3, 0.85], [0.5, 0.55], [0.7, 0.85], [0.85, 0.45]]),
	("x", &[[0.3, 0.45], [0.5, 0.65], [0.7, 0.85], [0.7, 0.45], [0.3, 0.85]]),
	("y", &[[0.3, 0.45], [0.5, 0.7], [0.7, 0.45], [0.4, 0.95]]),
	("z", &[[0.3, 0.45], [0.7, 0.45], [0.5, 0.65], [0.3, 0.85], [0.7, 0.85]]),
];

pub(super) const DIGITS: &[Glyph] = &[
	("0", &[[0.5, 0.15], [0.28, 0.35], [0.28, 0.65], [0.5, 0.85], [0.72, 0.65], [0.72, 0.35]]),
	("1", &[[0.5, 0.15], [0.5, 0.5], [0.5, 0.85]]),
	("2", &[[0.28, 0.3], [0.5, 0.15], [0.72, 0.3], [0.5, 0.6], [0.25, 0.85], [0.75, 0.85]]),
	("3", &[[0.28, 0.2], [0.6, 0.15], [0.68, 0.35], [0.45, 0.5], [0.7, 0.68], [0.5, 0.85], [0.25, 0.8]]),
	("4", &[[0.6, 0.85], [0.6, 0.15], [0.25, 0.6], [0.78, 0.6]]),
	("5", &[[0.72, 0.15], [0.32, 0.15], [0.3, 0.45], [0.6, 0.45], [0.72, 0.68], [0.5, 0.85], [0.27, 0.8]]),
	("6", &[[0.68, 0.18], [0.4, 0.3], [0.28, 0.6], [0.5, 0.85], [0.72, 0.68], [0.5, 0.5]]),
	("7", &[[0.25, 0.15], [0.75, 0.15], [0.6, 0.5], [0.45, 0.85]]),
	("8", &[[0.5, 0.15], [0.3, 0.3], [0.5, 0.5], [0.72, 0.7], [0.5, 0.85], [0.28, 0.7], [0.7, 0.3]]),
	("9", &[[0.72, 0.3], [0.5, 0.15], [0.28, 0.32], [0.5, 0.5], [0.72, 0.55], [0.6, 0.85]]),
];

pub(super) const TOKENS: &[Glyph] = &[
	("10", &[[0.25, 0.15], [0.25, 0.5], [0.25, 0.85], [0.65, 0.15], [0.48, 0.5], [0.65, 0.85], [0.82, 0.5]]),
];
