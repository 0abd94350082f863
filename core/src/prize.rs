use crate::Amount;

/// What a tile turns out to be once it is revealed.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PrizeKind {
    Money,
    Penalty,
    Skip,
    Blank,
    GameOver,
}

impl PrizeKind {
    /// Whether revealing this kind moves the winnings total.
    pub const fn is_monetary(self) -> bool {
        matches!(self, Self::Money | Self::Penalty)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Prize {
    kind: PrizeKind,
    amount: Option<Amount>,
    label: &'static str,
}

impl Prize {
    pub const fn money(amount: Amount, label: &'static str) -> Self {
        Self {
            kind: PrizeKind::Money,
            amount: Some(amount),
            label,
        }
    }

    /// `amount` is the size of the loss and is stored negated.
    pub const fn penalty(amount: Amount, label: &'static str) -> Self {
        Self {
            kind: PrizeKind::Penalty,
            amount: Some(-amount.abs()),
            label,
        }
    }

    pub const fn skip(label: &'static str) -> Self {
        Self::without_amount(PrizeKind::Skip, label)
    }

    pub const fn blank(label: &'static str) -> Self {
        Self::without_amount(PrizeKind::Blank, label)
    }

    pub const fn game_over(label: &'static str) -> Self {
        Self::without_amount(PrizeKind::GameOver, label)
    }

    const fn without_amount(kind: PrizeKind, label: &'static str) -> Self {
        Self {
            kind,
            amount: None,
            label,
        }
    }

    pub const fn kind(&self) -> PrizeKind {
        self.kind
    }

    pub const fn amount(&self) -> Option<Amount> {
        self.amount
    }

    pub const fn label(&self) -> &'static str {
        self.label
    }

    /// Contribution to the winnings total when this prize is revealed.
    pub const fn value(&self) -> Amount {
        match (self.kind.is_monetary(), self.amount) {
            (true, Some(amount)) => amount,
            _ => 0,
        }
    }
}

pub const CLASSIC_PRIZES: [Prize; 20] = [
    Prize::money(5_000_000, "۵ میلیون تومان"),
    Prize::money(3_000_000, "۳ میلیون تومان"),
    Prize::money(2_500_000, "۲.۵ میلیون تومان"),
    Prize::money(2_000_000, "۲ میلیون تومان"),
    Prize::money(1_500_000, "۱.۵ میلیون تومان"),
    Prize::money(1_500_000, "۱.۵ میلیون تومان"),
    Prize::money(1_000_000, "۱ میلیون تومان"),
    Prize::money(1_000_000, "۱ میلیون تومان"),
    Prize::money(800_000, "۸۰۰ هزار تومان"),
    Prize::money(700_000, "۷۰۰ هزار تومان"),
    Prize::money(500_000, "۵۰۰ هزار تومان"),
    Prize::money(500_000, "۵۰۰ هزار تومان"),
    Prize::penalty(500_000, "منفی ۵۰۰ هزار تومان"),
    Prize::penalty(300_000, "منفی ۳۰۰ هزار تومان"),
    Prize::penalty(200_000, "منفی ۲۰۰ هزار تومان"),
    Prize::skip("رد شو"),
    Prize::skip("رد شو"),
    Prize::blank("پوچ"),
    Prize::blank("پوچ"),
    Prize::blank("پوچ"),
];

pub const TRIVIA_PRIZES: [Prize; 12] = [
    Prize::money(3_000_000, "۳ میلیون تومان"),
    Prize::money(2_000_000, "۲ میلیون تومان"),
    Prize::money(1_500_000, "۱.۵ میلیون تومان"),
    Prize::money(1_000_000, "۱ میلیون تومان"),
    Prize::money(1_000_000, "۱ میلیون تومان"),
    Prize::money(1_000_000, "۱ میلیون تومان"),
    Prize::money(500_000, "۵۰۰ هزار تومان"),
    Prize::penalty(500_000, "منفی ۵۰۰ هزار تومان"),
    Prize::skip("رد شو"),
    Prize::blank("پوچ"),
    Prize::blank("پوچ"),
    Prize::game_over("باختی"),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn penalty_amount_is_always_negative() {
        assert_eq!(Prize::penalty(500, "x").amount(), Some(-500));
        assert_eq!(Prize::penalty(-500, "x").amount(), Some(-500));
    }

    #[test]
    fn non_monetary_prizes_have_no_value() {
        for prize in [Prize::skip("s"), Prize::blank("b"), Prize::game_over("g")] {
            assert_eq!(prize.amount(), None);
            assert_eq!(prize.value(), 0);
            assert!(!prize.kind().is_monetary());
        }
    }

    #[test]
    fn classic_money_sums_to_twenty_million() {
        let money: Amount = CLASSIC_PRIZES
            .iter()
            .filter(|prize| prize.kind() == PrizeKind::Money)
            .map(Prize::value)
            .sum();
        assert_eq!(money, 20_000_000);
    }

    #[test]
    fn classic_layout_matches_kind_counts() {
        let count = |kind| CLASSIC_PRIZES.iter().filter(|p| p.kind() == kind).count();
        assert_eq!(count(PrizeKind::Money), 12);
        assert_eq!(count(PrizeKind::Penalty), 3);
        assert_eq!(count(PrizeKind::Skip), 2);
        assert_eq!(count(PrizeKind::Blank), 3);
        assert_eq!(count(PrizeKind::GameOver), 0);
    }

    #[test]
    fn trivia_layout_has_single_game_over() {
        let game_overs = TRIVIA_PRIZES
            .iter()
            .filter(|p| p.kind() == PrizeKind::GameOver)
            .count();
        assert_eq!(game_overs, 1);
    }
}
