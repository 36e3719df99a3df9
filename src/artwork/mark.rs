use super::{
    Seg::{self, Close, CurveTo, MoveTo},
    ft, l, p, r, rt,
};

pub(crate) static PERIMETER: &[Seg] = &[
    // left wing, leading edge
    MoveTo(l(73.977794, 282.246470)),
    CurveTo(
        l(73.883624, 257.774170),
        l(126.304670, 235.789760),
        l(167.909670, 213.081560),
    ),
    CurveTo(
        l(210.484640, 190.947100),
        l(263.150880, 157.254600),
        l(269.623680, 148.155170),
    ),
    // head
    CurveTo(
        p(275.191880, 140.327420),
        p(269.839980, 133.310800),
        p(276.059650, 127.506190),
    ),
    CurveTo(
        p(286.595280, 117.673640),
        p(309.903650, 127.080550),
        p(309.903650, 127.080550),
    ),
    CurveTo(
        p(329.383360, 120.770220),
        p(336.119160, 122.161820),
        p(344.073280, 127.680550),
    ),
    CurveTo(
        p(350.299990, 132.000770),
        p(344.896370, 139.256320),
        r(350.414360, 148.467920),
    ),
    // right wing
    CurveTo(
        r(353.756740, 154.047600),
        r(384.724500, 174.504720),
        r(411.774040, 190.786410),
    ),
    CurveTo(
        r(442.391090, 209.215460),
        r(501.558930, 237.365520),
        r(523.480400, 252.805020),
    ),
    CurveTo(
        r(529.622190, 257.130740),
        r(546.508970, 268.007830),
        r(546.180780, 282.695200),
    ),
    CurveTo(
        r(525.054890, 282.146470),
        r(501.006500, 280.786330),
        r(481.938570, 289.908330),
    ),
    CurveTo(
        r(434.929310, 312.397310),
        r(410.960720, 336.764950),
        r(394.599010, 349.718160),
    ),
    // tail
    CurveTo(
        r(380.442620, 360.925470),
        r(336.504020, 402.897790),
        rt(319.965380, 411.704360),
    ),
    CurveTo(
        ft(315.274030, 460.083760),
        ft(277.985540, 490.298510),
        ft(219.356590, 490.313020),
    ),
    CurveTo(
        ft(164.705390, 490.326520),
        ft(106.655900, 472.630580),
        ft(84.580471, 433.491850),
    ),
    CurveTo(
        ft(72.602628, 412.255680),
        ft(69.306950, 383.452180),
        ft(80.690676, 364.029490),
    ),
    CurveTo(
        ft(90.442479, 347.391150),
        ft(105.261980, 344.896970),
        ft(113.634930, 344.636640),
    ),
    CurveTo(
        ft(94.247561, 349.988680),
        ft(86.284044, 362.681030),
        ft(84.895140, 364.999900),
    ),
    CurveTo(
        ft(68.736161, 391.978430),
        ft(81.820690, 427.131040),
        ft(97.898581, 443.943260),
    ),
    CurveTo(
        ft(118.874950, 465.877680),
        ft(155.320920, 483.254050),
        ft(217.471650, 483.228330),
    ),
    CurveTo(
        ft(295.609590, 483.196030),
        ft(302.747630, 434.598940),
        ft(301.575330, 411.122340),
    ),
    // left wing, trailing edge
    CurveTo(
        l(289.352120, 408.535100),
        l(268.100100, 385.143590),
        l(218.117950, 343.677970),
    ),
    CurveTo(
        l(198.001420, 326.989120),
        l(154.068400, 293.230440),
        l(126.355340, 286.487540),
    ),
    CurveTo(
        l(106.983590, 281.774170),
        l(88.442594, 282.034780),
        l(73.977794, 282.246470),
    ),
    Close,
];

pub(crate) static RIGHT_EYE: &[Seg] = &[
    MoveTo(r(338.300000, 149.099980)),
    CurveTo(
        r(345.250000, 163.849980),
        r(342.600000, 168.199980),
        r(343.100000, 170.199980),
    ),
    CurveTo(
        r(343.600000, 172.199980),
        r(345.527290, 171.473970),
        r(346.350000, 170.749980),
    ),
    CurveTo(
        r(347.766970, 169.503030),
        r(357.100000, 158.749980),
        r(338.300000, 149.099980),
    ),
    Close,
];

pub(crate) static LEFT_EYE: &[Seg] = &[
    MoveTo(l(282.106930, 149.151200)),
    CurveTo(
        l(275.156930, 163.901200),
        l(277.806930, 168.251200),
        l(277.306930, 170.251200),
    ),
    CurveTo(
        l(276.806930, 172.251200),
        l(274.879640, 171.525190),
        l(274.056930, 170.801200),
    ),
    CurveTo(
        l(272.639960, 169.554250),
        l(263.306930, 158.801200),
        l(282.106930, 149.151200),
    ),
    Close,
];

pub(crate) static GILL: &[Seg] = &[
    MoveTo(p(345.810920, 210.370830)),
    CurveTo(
        p(354.767600, 198.585720),
        p(361.078010, 184.850690),
        p(354.596200, 163.166080),
    ),
    CurveTo(
        p(366.717020, 179.104580),
        p(376.198660, 206.571000),
        p(344.596710, 232.698250),
    ),
    CurveTo(
        p(354.024800, 219.145370),
        p(354.260500, 215.220580),
        p(354.614050, 208.738770),
    ),
    CurveTo(
        p(352.892730, 210.760090),
        p(349.182150, 211.288680),
        p(345.810920, 210.370830),
    ),
    Close,
];
