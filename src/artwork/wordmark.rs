use super::{
    Seg::{self, Close, CurveTo, LineTo, MoveTo},
    p,
};

pub(crate) static M: &[Seg] = &[
    MoveTo(p(5.2, 627.099980)),
    LineTo(p(16.2, 627.099980)),
    LineTo(p(33.3, 676.799980)),
    LineTo(p(50.9, 626.999980)),
    LineTo(p(62.0, 626.999980)),
    LineTo(p(65.7, 688.399980)),
    LineTo(p(57.3, 688.399980)),
    LineTo(p(54.8, 635.499980)),
    LineTo(p(35.8, 687.999980)),
    LineTo(p(29.3, 687.999980)),
    LineTo(p(11.7, 635.099980)),
    LineTo(p(8.9, 688.299980)),
    LineTo(p(1.0, 688.299980)),
    Close,
];

pub(crate) static A: &[Seg] = &[
    MoveTo(p(145.5, 626.900390)),
    LineTo(p(124.099610, 688.199220)),
    LineTo(p(133.099610, 688.300780)),
    LineTo(p(139.5, 669.300780)),
    LineTo(p(161.900390, 669.300780)),
    LineTo(p(168.400390, 688.300780)),
    LineTo(p(177.5, 688.300780)),
    LineTo(p(155.900390, 626.900390)),
    LineTo(p(145.5, 626.900390)),
    Close,
    // counter
    MoveTo(p(150.199220, 634.5)),
    LineTo(p(160.099610, 662.699220)),
    LineTo(p(141.199220, 662.699220)),
    LineTo(p(150.199220, 634.5)),
    Close,
];

pub(crate) static G: &[Seg] = &[
    MoveTo(p(283.1, 629.399980)),
    LineTo(p(280.9, 636.199980)),
    CurveTo(
        p(280.9, 636.199980),
        p(274.402680, 633.299980),
        p(266.8, 633.299980),
    ),
    CurveTo(
        p(259.197320, 633.299980),
        p(241.3, 637.468290),
        p(241.3, 657.999980),
    ),
    CurveTo(
        p(241.3, 678.531670),
        p(258.389840, 682.199980),
        p(266.3, 682.199980),
    ),
    CurveTo(
        p(274.210160, 682.199980),
        p(276.7, 680.499980),
        p(276.7, 680.499980),
    ),
    LineTo(p(276.7, 662.799980)),
    LineTo(p(264.0, 662.799980)),
    LineTo(p(264.0, 656.099980)),
    LineTo(p(285.0, 656.099980)),
    LineTo(p(285.0, 685.499980)),
    CurveTo(
        p(285.0, 685.499980),
        p(277.252910, 689.099980),
        p(264.9, 689.099980),
    ),
    CurveTo(
        p(252.547090, 689.099980),
        p(232.4, 683.421200),
        p(232.4, 658.399980),
    ),
    CurveTo(
        p(232.4, 633.378760),
        p(253.885090, 626.499980),
        p(266.5, 626.499980),
    ),
    CurveTo(
        p(279.114910, 626.499980),
        p(283.1, 629.399980),
        p(283.1, 629.399980),
    ),
    Close,
];

pub(crate) static N: &[Seg] = &[
    MoveTo(p(348.1, 688.299980)),
    LineTo(p(348.1, 626.899980)),
    LineTo(p(357.5, 626.899980)),
    LineTo(p(388.5, 674.799980)),
    LineTo(p(388.2, 627.099980)),
    LineTo(p(396.0, 627.099980)),
    LineTo(p(396.0, 688.099980)),
    LineTo(p(387.0, 688.099980)),
    LineTo(p(355.6, 637.699980)),
    LineTo(p(355.6, 688.399980)),
    Close,
];

pub(crate) static E: &[Seg] = &[
    MoveTo(p(461.0, 626.899980)),
    LineTo(p(495.4, 626.899980)),
    LineTo(p(495.4, 634.199980)),
    LineTo(p(469.5, 634.199980)),
    LineTo(p(469.5, 652.799980)),
    LineTo(p(494.0, 652.799980)),
    LineTo(p(494.0, 659.999980)),
    LineTo(p(469.5, 659.999980)),
    LineTo(p(469.5, 681.399980)),
    LineTo(p(497.1, 681.399980)),
    LineTo(p(497.1, 688.299980)),
    LineTo(p(461.0, 688.299980)),
    Close,
];

pub(crate) static T: &[Seg] = &[
    MoveTo(p(550.9, 626.899980)),
    LineTo(p(598.4, 626.899980)),
    LineTo(p(598.4, 634.299980)),
    LineTo(p(579.0, 634.299980)),
    LineTo(p(579.0, 688.199980)),
    LineTo(p(570.3, 688.199980)),
    LineTo(p(570.3, 634.199980)),
    LineTo(p(550.9, 634.199980)),
    Close,
];
