pub const PAGE: &str = "relative z-10 min-h-screen flex flex-col items-center justify-center px-4 py-6 md:py-8 lg:py-10";
pub const HEADER: &str = "text-center mb-6 md:mb-8 lg:mb-10";
pub const TITLE: &str = "font-display text-4xl md:text-5xl lg:text-7xl font-bold text-gold-gradient text-shadow-gold mb-2";
pub const SUBTITLE: &str = "text-[#F4D03F] text-lg md:text-xl lg:text-2xl tracking-[0.3em] uppercase";
pub const SUBTITLE_RULE_LEFT: &str = "h-px w-12 md:w-20 bg-gradient-to-r from-transparent to-[#D4AF37]";
pub const SUBTITLE_RULE_RIGHT: &str = "h-px w-12 md:w-20 bg-gradient-to-l from-transparent to-[#D4AF37]";
pub const FOOTER: &str = "mt-auto pt-8 text-center text-[#D4AF37]/50 text-sm";

pub const WHEEL_CONTAINER: &str = "relative w-[80vw] h-[80vw] max-w-[500px] max-h-[500px] md:w-[60vw] md:h-[60vw] lg:w-[45vw] lg:h-[45vw] flex-shrink-0";
pub const WHEEL_GLOW: &str = "absolute inset-0 rounded-full glow-gold animate-pulse-gold";
pub const WHEEL_FRAME: &str = "absolute inset-0 rounded-full border-[8px] md:border-[12px] border-[#D4AF37] shadow-2xl";
pub const WHEEL_ROTOR: &str = "w-full h-full rounded-full overflow-hidden will-change-transform";
pub const POINTER: &str = "absolute top-0 left-1/2 -translate-x-1/2 -translate-y-2 z-20";
pub const POINTER_BALL: &str = "absolute -top-3 left-1/2 -translate-x-1/2 w-5 h-5 rounded-full bg-[#D4AF37] shadow-lg";
pub const POINTER_ARROW: &str = "w-0 h-0 border-l-[20px] border-r-[20px] border-t-[50px] border-l-transparent border-r-transparent border-t-[#D4AF37] drop-shadow-lg";
pub const HUB_BADGE: &str = "w-16 h-16 md:w-20 md:h-20 rounded-full bg-gradient-to-br from-[#F4D03F] to-[#B8860B] shadow-xl flex items-center justify-center";

pub const BUTTON_ROW: &str = "mt-6 md:mt-8 lg:mt-10 flex items-center gap-4";
pub const BUTTON_GOLD: &str = "btn-gold text-xl md:text-2xl tracking-wider";
pub const BUTTON_GHOST: &str = "px-6 py-3 rounded-full border-2 border-[#D4AF37] text-[#F4D03F] font-bold tracking-wider hover:bg-[#D4AF37]/10 transition-all duration-300";
pub const BUTTON_ICON: &str = "w-12 h-12 rounded-full bg-white/10 hover:bg-white/20 flex items-center justify-center text-2xl transition-all duration-300";

pub const MODAL_OVERLAY: &str = "fixed inset-0 z-50 flex items-center justify-center p-4";
pub const MODAL_BACKDROP: &str = "absolute inset-0 bg-black/70 backdrop-blur-sm";
pub const MODAL_CARD: &str = "relative z-10 glass-card p-8 md:p-12 max-w-lg w-full text-center animate-pop-in";
pub const MODAL_CLOSE: &str = "absolute top-4 right-4 w-10 h-10 rounded-full bg-white/10 hover:bg-white/20 flex items-center justify-center transition-all hover:rotate-90 duration-300";
pub const MODAL_TITLE: &str = "text-2xl md:text-3xl font-bold text-[#F4D03F] mb-4";
pub const MODAL_PRIZE: &str = "bg-gradient-to-r from-[#D4AF37]/20 via-[#F4D03F]/30 to-[#D4AF37]/20 rounded-xl p-6 mb-6";
pub const MODAL_ACCENT_TOP: &str = "absolute -top-4 left-1/2 -translate-x-1/2 w-20 h-1 bg-gradient-to-r from-transparent via-[#D4AF37] to-transparent";
pub const MODAL_ACCENT_BOTTOM: &str = "absolute -bottom-4 left-1/2 -translate-x-1/2 w-20 h-1 bg-gradient-to-r from-transparent via-[#D4AF37] to-transparent";

pub const CONFETTI_CANVAS: &str = "fixed inset-0 w-full h-full pointer-events-none z-[60]";

// Animations and utilities that have no Tailwind equivalent
pub const CUSTOM_CSS: &str = r#"
@keyframes pulse-gold {
    0%, 100% {
        box-shadow: 0 0 20px rgba(212, 175, 55, 0.4), 0 0 40px rgba(212, 175, 55, 0.2);
    }
    50% {
        box-shadow: 0 0 40px rgba(212, 175, 55, 0.8), 0 0 80px rgba(212, 175, 55, 0.4);
    }
}

@keyframes pop-in {
    0% {
        transform: scale(0.5);
        opacity: 0;
    }
    100% {
        transform: scale(1);
        opacity: 1;
    }
}

@keyframes pointer-bounce {
    0%, 100% { transform: scale(1); }
    50% { transform: scale(1.2); }
}

.animate-pulse-gold {
    animation: pulse-gold 2s ease-in-out infinite;
}

.animate-pop-in {
    animation: pop-in 0.3s ease-out;
}

.animate-pointer {
    animation: pointer-bounce 0.5s ease-in-out infinite;
}

.glow-gold {
    box-shadow: 0 0 30px rgba(212, 175, 55, 0.5);
}

.text-gold-gradient {
    background: linear-gradient(90deg, #D4AF37, #F4C430, #FFD700, #F4C430, #D4AF37);
    -webkit-background-clip: text;
    background-clip: text;
    color: transparent;
}

.text-shadow-gold {
    text-shadow: 0 0 30px rgba(212, 175, 55, 0.5);
}

.glass-card {
    background: rgba(26, 26, 46, 0.85);
    border: 1px solid rgba(212, 175, 55, 0.3);
    border-radius: 1.5rem;
    box-shadow: 0 0 50px rgba(212, 175, 55, 0.6), 0 0 100px rgba(212, 175, 55, 0.3);
}

.btn-gold {
    padding: 1rem 3rem;
    border-radius: 9999px;
    font-weight: 700;
    color: #1a1a2e;
    background: linear-gradient(135deg, #F4D03F, #D4AF37, #B8860B);
    box-shadow: 0 0 30px rgba(212, 175, 55, 0.5);
    transition: transform 0.2s ease, opacity 0.2s ease;
}

.btn-gold:hover:not(:disabled) {
    transform: translateY(-2px) scale(1.02);
}

.btn-gold:disabled {
    opacity: 0.6;
    cursor: not-allowed;
}
"#;
